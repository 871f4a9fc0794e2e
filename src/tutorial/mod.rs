pub mod flow;

#[cfg(test)]
mod flow_tests;

pub use flow::{
    TutorialFlow,
    TutorialState,
};
