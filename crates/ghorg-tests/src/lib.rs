#![cfg(test)]

mod fixtures;
mod org_client;
