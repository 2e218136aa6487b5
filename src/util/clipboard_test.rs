#![cfg(not(feature = "csr"))]

use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;

#[test]
fn page_url_is_none_off_browser() {
    assert!(page_url().is_none());
}

#[test]
fn copy_text_reports_failure_off_browser() {
    // Off-browser the future resolves without suspending.
    let mut fut = pin!(copy_text("https://example.com/"));
    let waker = Waker::noop();
    let mut cx = Context::from_waker(waker);
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(copied) => assert!(!copied),
        Poll::Pending => panic!("copy_text should resolve immediately off-browser"),
    }
}

#[test]
fn manual_copy_prompt_is_noop_but_callable() {
    manual_copy_prompt("https://example.com/");
}
