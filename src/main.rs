//! trialrun CLI entry point

fn main() {
    trialrun::cli::init_tracing();
    trialrun::cli::run();
}
