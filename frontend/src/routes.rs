use dioxus::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::pages::home_page::HomePage;
use crate::pages::upload_page::UploadPage;
use crate::pages::viewer_page::ViewerPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Sidebar)]


    #[route("/")]
    HomePage {},


    #[route("/upload")]
    UploadPage {},


    #[route("/viewer?:name&:page")]
    ViewerPage {
        name: String,
        page: String,
    },

}

impl Route {
    pub fn viewer_for(name: &str) -> Self {
        Self::ViewerPage {
            name: name.to_string(),
            page: String::new(),
        }
    }
}
