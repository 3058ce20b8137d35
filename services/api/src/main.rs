use carbon_compass_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("carbon compass error: {err}");
        std::process::exit(1);
    }
}
