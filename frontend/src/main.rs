//! Frontend application entry point.

use docdesk::app::App;

fn main() {
    dioxus::launch(App);
}
