use clap::Parser;
use simple_blog::{output, site};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "simple-blog")]
#[command(version)]
#[command(about = "Static site generator for a personal blog")]
#[command(long_about = "\
Static site generator for a personal blog

Run it in the site directory. It reads the content tree and writes the
generated HTML next to it, creating any missing directories and default
content first.

  _sections/header.md         # \"# Site Title\" + home page intro
  _posts/2024-01-02-hello.md  # post: date from filename, title from \"# \" line
  _pages/about.md             # page: title from \"# \" line

  index.html                  # generated: intro, 5 newest posts, pages
  all-posts.html              # generated: every post, newest first
  posts/<id>.html             # generated
  pages/<id>.html             # generated")]
struct Cli {}

fn main() -> ExitCode {
    Cli::parse();

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {e}");
            return ExitCode::FAILURE;
        }
    };
    let today = chrono::Local::now().date_naive();

    match site::build(&root, today) {
        Ok(report) => {
            output::print_build_output(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::print_build_error(&err);
            ExitCode::FAILURE
        }
    }
}
