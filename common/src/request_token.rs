//! Tokens that tell the latest request apart from superseded ones.
//!
//! Requests are never cancelled on the wire. A response is only applied when
//! it carries the token handed out last, so a slow answer for page 2 cannot
//! overwrite a faster answer for page 3.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Makes every issued token stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let mut seq = RequestSequencer::default();
        let first = seq.issue();
        assert!(seq.is_current(first));
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn invalidate_retires_outstanding_tokens() {
        let mut seq = RequestSequencer::default();
        let token = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(token));
        let next = seq.issue();
        assert!(seq.is_current(next));
    }

    #[test]
    fn older_request_resuming_late_is_stale() {
        // page 2 is still loading when page 1 is requested and finishes first
        let mut seq = RequestSequencer::default();
        let page_two = seq.issue();
        let page_one = seq.issue();
        assert!(seq.is_current(page_one));
        assert!(!seq.is_current(page_two));
    }
}
