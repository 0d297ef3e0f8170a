//! Full-name binary entry point.

fn main() {
    pixiv_token_bootstrap::main_entry()
}
