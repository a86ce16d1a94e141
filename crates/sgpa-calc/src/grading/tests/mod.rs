mod common;

mod catalog;
mod engine;
mod probability;
mod rubric;
