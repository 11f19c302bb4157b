pub mod get_feed;
