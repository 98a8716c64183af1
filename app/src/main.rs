#[tokio::main]
async fn main() -> anyhow::Result<()> {
    osmoweb_lib::run().await
}
