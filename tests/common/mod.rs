#![allow(dead_code)]

pub mod data_generators;
