//! Metro route finder server.
//!
//! Answers: "how do I get from this station to that one with as few
//! changes as possible?" over a network of named lines and stations.

pub mod cache;
pub mod config;
pub mod domain;
pub mod planner;
pub mod storage;
pub mod web;
