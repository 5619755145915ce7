// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_multi_select_block(options: usize) -> String {
    let body = (0..options)
        .map(|i| format!("Option {i}//opt{i}"))
        .collect::<Vec<_>>()
        .join("||");
    format!("?[%{{{{choices}}}} {body}||...Something else]")
}

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Onboarding\n\nWhat should we call you? ?[%{{name}}...Your name]\n\nPick a colour ?[%{{color}} Red//r | Blue//b | Green//g] and move on.\n\n```\n?[Not a button]\n```\n\nUse `?[Raw]` to show the syntax. ?[Continue | Cancel]\n\n";
    base.repeat(size)
}
