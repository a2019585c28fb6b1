use anyhow::Result;

fn main() -> Result<()> {
    quizrun::cli::run()
}
