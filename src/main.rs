use rollcall::commands::Cli;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    Cli::menu()
}
