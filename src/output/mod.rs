//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_assist, print_benchmark_result, print_ranked, print_solved_banner, print_trace,
    print_tune_result,
};
pub use formatters::{create_progress_bar, format_feedback};
