fn main() -> anyhow::Result<()> {
    takeout_parser::cli::run()
}
