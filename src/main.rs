//! absencelog main entrypoint.

use absencelog::logging::init_tracing;
use absencelog::run;
use absencelog::ui::messages::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = init_tracing(None) {
        eprintln!("{e}");
    }

    println!();
    if let Err(e) = run().await {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
