//! Terminal player
//!
//! Reads single-letter transport commands from a line-based input and
//! applies them to the playback manager. Audio output is a logging engine
//! that reports what a real engine would be doing.

use anyhow::Result;
use podcaster_playback::{
    on_track_ended, AudioEngine, Episode, PlaybackManager, PlaybackSnapshot, TrackEndAction,
};
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

pub const HELP: &str =
    "commands: [p]lay/pause  [n]ext  [b]ack  [l]oop  [s]huffle  [e]nd of track  [i]nfo  [q]uit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    Next,
    Previous,
    ToggleLoop,
    ToggleShuffle,
    TrackEnded,
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown command: {0:?}")]
pub struct UnknownCommand(String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "play" | "pause" => Ok(Command::TogglePlay),
            "n" | "next" => Ok(Command::Next),
            "b" | "back" | "prev" => Ok(Command::Previous),
            "l" | "loop" => Ok(Command::ToggleLoop),
            "s" | "shuffle" => Ok(Command::ToggleShuffle),
            "e" | "end" => Ok(Command::TrackEnded),
            "i" | "info" | "" => Ok(Command::Status),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Audio engine stand-in that logs instead of rendering audio
#[derive(Debug, Default)]
pub struct LoggingEngine {
    loaded: Option<String>,
}

impl AudioEngine for LoggingEngine {
    fn load(&mut self, episode: &Episode) {
        info!(title = %episode.title, url = %episode.url, "Engine loaded episode");
        self.loaded = Some(episode.url.clone());
    }

    fn set_playing(&mut self, playing: bool) {
        info!(playing, url = ?self.loaded, "Engine transport");
    }

    fn set_looping(&mut self, looping: bool) {
        info!(looping, "Engine loop");
    }

    fn stop(&mut self) {
        info!(url = ?self.loaded, "Engine stopped");
        self.loaded = None;
    }
}

/// Apply one command, returns false when the player should close
pub fn apply(manager: &mut PlaybackManager, command: Command) -> bool {
    match command {
        Command::TogglePlay => manager.toggle_play(),
        Command::Next => manager.play_next(),
        Command::Previous => manager.play_previous(),
        Command::ToggleLoop => manager.toggle_loop(),
        Command::ToggleShuffle => manager.toggle_shuffle(),
        Command::TrackEnded => {
            if on_track_ended(manager) == TrackEndAction::Restart {
                info!("Restarting current episode");
            }
        }
        Command::Status => {}
        Command::Quit => {
            manager.clear_player_state();
            return false;
        }
    }
    true
}

/// One-line player status
pub fn render_status(snapshot: &PlaybackSnapshot) -> String {
    let Some(episode) = snapshot.current_episode() else {
        return "nothing playing".to_string();
    };

    let flag = |on: bool, name: &str| if on { name.to_uppercase() } else { name.to_string() };

    format!(
        "[{}/{}] {} {} - {} | {} {} | {}{}",
        snapshot.current_index + 1,
        snapshot.queue.len(),
        if snapshot.is_playing { ">" } else { "||" },
        episode.title,
        episode.members,
        flag(snapshot.is_looping, "loop"),
        flag(snapshot.is_shuffling, "shuffle"),
        if snapshot.has_previous { "<< " } else { "" },
        if snapshot.has_next { ">>" } else { "" },
    )
}

/// Run the command loop until quit or end of input
pub fn run<R: BufRead, W: Write>(manager: &mut PlaybackManager, input: R, mut out: W) -> Result<()> {
    writeln!(out, "{}", HELP)?;
    writeln!(out, "{}", render_status(&manager.snapshot()))?;

    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}\n{}", e, HELP)?;
                continue;
            }
        };

        if !apply(manager, command) {
            break;
        }
        writeln!(out, "{}", render_status(&manager.snapshot()))?;
    }

    manager.clear_player_state();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn create_test_episode(title: &str) -> Episode {
        Episode {
            title: title.to_string(),
            members: "Diego e Richard".to_string(),
            thumbnail: String::new(),
            duration: 1200,
            url: format!("https://cdn.example.com/{}.m4a", title),
        }
    }

    fn loaded() -> PlaybackManager {
        let mut manager = PlaybackManager::default();
        manager
            .play_list(vec![create_test_episode("A"), create_test_episode("B")], 0)
            .unwrap();
        manager
    }

    #[test]
    fn parse_commands() {
        assert_eq!("p".parse(), Ok(Command::TogglePlay));
        assert_eq!(" N ".parse(), Ok(Command::Next));
        assert_eq!("back".parse(), Ok(Command::Previous));
        assert_eq!("".parse(), Ok(Command::Status));
        assert_eq!(
            "x".parse::<Command>(),
            Err(UnknownCommand("x".to_string()))
        );
    }

    #[test]
    fn status_line() {
        let mut manager = loaded();
        assert_eq!(
            render_status(&manager.snapshot()),
            "[1/2] > A - Diego e Richard | loop shuffle | >>"
        );

        manager.play_next();
        manager.toggle_play();
        manager.toggle_loop();
        assert_eq!(
            render_status(&manager.snapshot()),
            "[2/2] || B - Diego e Richard | LOOP shuffle | << "
        );
    }

    #[test]
    fn status_line_empty() {
        assert_eq!(
            render_status(&PlaybackManager::default().snapshot()),
            "nothing playing"
        );
    }

    #[test]
    fn quit_clears_player() {
        let mut manager = loaded();
        assert!(!apply(&mut manager, Command::Quit));
        assert!(manager.is_empty());
        assert!(!manager.is_playing());
    }

    #[test]
    fn run_processes_input_until_quit() {
        let mut manager = loaded();
        let mut out = Vec::new();

        run(&mut manager, Cursor::new("n\nwhat\ne\nq\nn\n"), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("[2/2] > B"));
        assert!(output.contains("Unknown command: \"what\""));
        assert!(output.contains("[2/2] || B"));
        assert!(manager.is_empty());
    }
}
