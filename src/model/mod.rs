//! Payloads exchanged over the storylink HTTP surface.
//!
//! - [`ConnectRequest`] / [`ConnectResponse`]: Jira credential handshake
//! - [`JiraStory`] / [`StoriesResponse`]: story listing
//! - [`StoryDetails`]: one story with its derived description and criteria
//! - [`GenerateRequest`] / [`GenerateResponse`] / [`TestCase`]: test generation

mod generate;
mod story;

pub use generate::{GenerateRequest, GenerateResponse, TestCase};
pub use story::{ConnectRequest, ConnectResponse, JiraStory, StoriesResponse, StoryDetails};
