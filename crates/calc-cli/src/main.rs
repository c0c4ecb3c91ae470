fn main() -> anyhow::Result<()> {
    calc_cli::cli::run()
}
