//! Markdown terminal formatting using termimad

use std::io::IsTerminal;

use termimad::{gray, MadSkin};

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if color_enabled() {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        skin.print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Color policy: NO_COLOR wins, then CLICOLOR_FORCE, then CLICOLOR=0,
/// then whether stdout is a terminal
fn color_enabled() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    match std::env::var("CLICOLOR_FORCE") {
        Ok(force) if force != "0" => return true,
        _ => {}
    }
    match std::env::var("CLICOLOR") {
        Ok(value) if value == "0" => return false,
        _ => {}
    }
    std::io::stdout().is_terminal()
}

/// Customize termimad skin for notebook previews
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    // Prompt labels arrive as bold text
    skin.bold.set_fg(Blue);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);

    // Headers: magenta fading to blue
    skin.headers[0].set_fg(Magenta);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Magenta);
    skin.headers[2].set_fg(Blue);

    // Code blocks sit on a dark panel like a notebook input area
    skin.code_block.set_bg(gray(3));
    skin.inline_code.set_fg(Cyan);

    // Error tracebacks arrive as quoted lines
    skin.quote_mark.set_fg(Red);

    skin.table.set_fg(gray(12));
    skin.bullet.set_fg(Magenta);
}
