// Author: Dustin Pilgrim
// License: MIT

//! Gesture scripts: one motion event per line (`down 10 10`, `move 50 5`,
//! `up`). Blank lines and `#` comments are skipped.

use std::path::Path;

use boxdraw_core::MotionEvent;

pub fn load_script(path: &Path) -> Result<Vec<MotionEvent>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("read script {}: {e}", path.display()))?;
    parse_script(&text).map_err(|e| format!("{}: {e}", path.display()))
}

pub fn parse_script(text: &str) -> Result<Vec<MotionEvent>, String> {
    let mut events = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        }
        .trim();

        if line.is_empty() {
            continue;
        }

        let event = line
            .parse::<MotionEvent>()
            .map_err(|e| format!("line {}: {e}", i + 1))?;
        events.push(event);
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxdraw_core::MotionAction;

    #[test]
    fn skips_comments_and_blank_lines() {
        let events = parse_script(
            "# one box\n\
             down 10 10\n\
             \n\
             move 50 5   # drag up-right\n\
             up\n",
        )
        .unwrap();

        let actions: Vec<MotionAction> = events.iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            vec![MotionAction::Down, MotionAction::Move, MotionAction::Up]
        );
        assert_eq!(events[1], MotionEvent::moved(50.0, 5.0));
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse_script("down 1 1\nwiggle 2 2\n").unwrap_err();
        assert!(err.starts_with("line 2:"), "{err}");
    }

    #[test]
    fn empty_script_is_fine() {
        assert!(parse_script("").unwrap().is_empty());
    }
}
