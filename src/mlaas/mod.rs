pub mod api;

pub use api::{
    ApiResponse,
    MlaasClient,
};
