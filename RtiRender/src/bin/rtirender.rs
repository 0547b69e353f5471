fn main() -> anyhow::Result<()> {
    rtirender::cli::run_cli()
}
