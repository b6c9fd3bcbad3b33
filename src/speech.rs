// File: src/speech.rs
use crate::config::Config;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

/// Replaced by `speech_language` wherever it appears in a speech argument.
pub const LANGUAGE_PLACEHOLDER: &str = "{lang}";

/// The configured speech program for `text`, or `None` when speech is only
/// reported. The text goes last, after the configured arguments.
pub fn speech_command(config: &Config, text: &str) -> Option<Command> {
    let (program, leading) = config.speech_command.split_first()?;
    let mut command = Command::new(program);
    command
        .args(
            leading
                .iter()
                .map(|arg| arg.replace(LANGUAGE_PLACEHOLDER, &config.speech_language)),
        )
        .arg(text)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Some(command)
}

/// Starts the speech program and waits for it on a detached thread.
///
/// The returned handle yields the exit status; callers that don't care
/// simply drop it.
pub fn spawn_speech(
    config: &Config,
    text: &str,
) -> io::Result<Option<JoinHandle<io::Result<ExitStatus>>>> {
    let Some(mut command) = speech_command(config, text) else {
        return Ok(None);
    };
    let mut child = command.spawn()?;
    let reaper = thread::spawn(move || {
        let status = child.wait();
        match &status {
            Ok(status) if !status.success() => {
                tracing::warn!(%status, "speech command failed");
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(%err, "could not wait for speech command"),
        }
        status
    });
    Ok(Some(reaper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn config(command: &[&str]) -> Config {
        Config {
            speech_command: command.iter().map(|s| s.to_string()).collect(),
            speech_language: "vi-VN".into(),
            ..Config::default()
        }
    }

    #[test]
    fn language_fills_the_placeholder() {
        let command = speech_command(&config(&["espeak-ng", "-v", "{lang}"]), "bà").unwrap();
        assert_eq!(command.get_program(), OsStr::new("espeak-ng"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("-v"), OsStr::new("vi-VN"), OsStr::new("bà")]);
    }

    #[test]
    fn placeholder_inside_an_argument() {
        let command = speech_command(&config(&["say", "--lang={lang}"]), "mèo").unwrap();
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("--lang=vi-VN"), OsStr::new("mèo")]);
    }

    #[test]
    fn no_program_means_no_command() {
        assert!(speech_command(&config(&[]), "bà").is_none());
        assert!(spawn_speech(&config(&[]), "bà").unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn finished_speech_is_waited_for() {
        let reaper = spawn_speech(&config(&["sh", "-c", "exit 3"]), "bà")
            .unwrap()
            .unwrap();
        let status = reaper.join().unwrap().unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn missing_program_is_an_error() {
        let result = spawn_speech(&config(&["/nonexistent/speech-program"]), "bà");
        assert!(result.is_err());
    }
}
