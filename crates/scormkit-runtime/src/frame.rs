//! Page hierarchy model and API discovery.
//!
//! A SCORM API object may live several frames up from the content; the
//! classic discovery walk climbs the parent chain looking for it, with a
//! hard bound on nesting depth.

use crate::api::SharedApi;
use std::rc::Rc;
use tracing::debug;

/// Maximum number of enclosing parents the discovery walk will climb.
pub const MAX_PARENT_HOPS: usize = 7;

/// One node in the embedding page hierarchy.
///
/// The top of the hierarchy is modeled as a frame without a parent. An
/// `opener` is present when the page was opened from another window.
pub struct Frame {
    pub api: Option<SharedApi>,
    pub parent: Option<Rc<Frame>>,
    pub opener: Option<Rc<Frame>>,
}

impl Frame {
    /// A standalone frame, optionally exposing an API object.
    pub fn new(api: Option<SharedApi>) -> Rc<Self> {
        Rc::new(Frame {
            api,
            parent: None,
            opener: None,
        })
    }

    /// A frame nested inside `parent`.
    pub fn child_of(parent: Rc<Frame>, api: Option<SharedApi>) -> Rc<Self> {
        Rc::new(Frame {
            api,
            parent: Some(parent),
            opener: None,
        })
    }

    /// A frame opened from `opener`.
    pub fn opened_from(opener: Rc<Frame>, api: Option<SharedApi>) -> Rc<Self> {
        Rc::new(Frame {
            api,
            parent: None,
            opener: Some(opener),
        })
    }
}

/// Climb the parent chain from `start` until an API object turns up.
///
/// Gives up after [`MAX_PARENT_HOPS`] hops or at the top of the hierarchy;
/// either way the failure is final for this walk, never retried.
fn climb(start: &Rc<Frame>) -> Option<SharedApi> {
    let mut win = Rc::clone(start);
    let mut tries = 0;
    while win.api.is_none() {
        let Some(parent) = win.parent.clone() else {
            break;
        };
        tries += 1;
        if tries > MAX_PARENT_HOPS {
            debug!("api discovery gave up: too deeply nested");
            return None;
        }
        win = parent;
    }
    win.api.clone()
}

/// Discover a SCORM API object reachable from `window`.
///
/// Walks the parent chain first; when that fails and an opener window
/// exists, walks the opener's chain once. Returns `None` when neither
/// walk finds an API.
pub fn find_api(window: &Rc<Frame>) -> Option<SharedApi> {
    climb(window).or_else(|| window.opener.as_ref().and_then(climb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{shared, LmsApi};

    struct NullApi;

    impl LmsApi for NullApi {
        fn initialize(&mut self, _arg: &str) -> String {
            "true".to_string()
        }
        fn finish(&mut self, _arg: &str) -> String {
            "true".to_string()
        }
        fn set_value(&mut self, _field: &str, _value: &str) -> String {
            "true".to_string()
        }
        fn get_value(&mut self, _field: &str) -> String {
            String::new()
        }
    }

    fn nested(depth: usize, api_at_top: bool) -> Rc<Frame> {
        let api = api_at_top.then(|| shared(NullApi));
        let mut frame = Frame::new(api);
        for _ in 0..depth {
            frame = Frame::child_of(frame, None);
        }
        frame
    }

    #[test]
    fn finds_api_in_own_frame() {
        let frame = Frame::new(Some(shared(NullApi)));
        assert!(find_api(&frame).is_some());
    }

    #[test]
    fn finds_api_exactly_at_the_hop_bound() {
        let frame = nested(MAX_PARENT_HOPS, true);
        assert!(find_api(&frame).is_some());
    }

    #[test]
    fn gives_up_beyond_the_hop_bound() {
        let frame = nested(MAX_PARENT_HOPS + 1, true);
        assert!(find_api(&frame).is_none());
    }

    #[test]
    fn reaching_the_top_without_api_fails() {
        let frame = nested(3, false);
        assert!(find_api(&frame).is_none());
    }

    #[test]
    fn falls_back_to_the_opener_chain() {
        let opener = nested(2, true);
        let window = Frame::opened_from(opener, None);
        assert!(find_api(&window).is_some());
    }

    #[test]
    fn opener_walk_respects_the_hop_bound() {
        let opener = nested(MAX_PARENT_HOPS + 1, true);
        let window = Frame::opened_from(opener, None);
        assert!(find_api(&window).is_none());
    }
}
