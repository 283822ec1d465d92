//! check_talos entry point

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let execution = check_talos::run().await;
    println!("{}", execution.stdout);
    std::process::exit(execution.exit_code);
}
