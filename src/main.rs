fn main() -> anyhow::Result<()> {
    github_topics::cli::run()
}
