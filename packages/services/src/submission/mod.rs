pub mod controller;

pub use controller::{
    route_gateway_error, SubmissionController, SubmissionResult, SubmissionState,
};
