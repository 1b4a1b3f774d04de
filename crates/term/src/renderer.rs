//! TerminalRenderer: writes composed frames to a real terminal.
//!
//! The screen is cleared once when the game starts; every later frame homes
//! the cursor and overwrites in place, clearing the tail of each line.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    raw: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, raw: false }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(cursor::Show)?;
        self.out.queue(Print("\r\n"))?;
        self.out.flush()?;
        if self.raw {
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }

    /// Redraw in place.
    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        encode_frame_into(&mut self.out, lines)?;
        self.out.flush()?;
        Ok(())
    }

    /// Clear the screen and draw the last frame.
    pub fn draw_final(&mut self, lines: &[String]) -> Result<()> {
        encode_final_into(&mut self.out, lines)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

/// Queue one frame: cursor home, then every line.
pub fn encode_frame_into<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    encode_lines(out, lines)
}

/// Queue a full clear, then every line.
pub fn encode_final_into<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    encode_lines(out, lines)
}

fn encode_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            // Raw mode: a bare \n would not return the carriage.
            out.queue(Print("\r\n"))?;
        }
        out.queue(Print(line))?;
        out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    }
    out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn frame_homes_cursor_without_full_clear() {
        let mut buf = Vec::new();
        encode_frame_into(&mut buf, &lines(&["ab", "cd"])).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("\x1b[1;1H"));
        assert!(!text.contains("\x1b[2J"));
        assert!(text.contains("ab"));
        assert!(text.contains("\r\ncd"));
    }

    #[test]
    fn final_frame_clears_first() {
        let mut buf = Vec::new();
        encode_final_into(&mut buf, &lines(&["bye"])).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("\x1b[2J"));
        assert!(text.contains("bye"));
    }

    #[test]
    fn renderer_draws_into_any_writer() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.draw(&lines(&["⦢ ="])).unwrap();
        let text = String::from_utf8(term.writer().clone()).unwrap();
        assert!(text.contains("⦢ ="));
    }
}
