//! Platform speech collaborator: pronounce a word through whatever speech
//! command the OS ships. Fire-and-forget; a missing backend degrades to
//! `SpeechError::Unsupported` so the UI can show a notice instead of
//! crashing.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum SpeechError {
    Unsupported,
    Failed(io::Error),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechError::Unsupported => write!(f, "no speech backend available"),
            SpeechError::Failed(err) => write!(f, "speech backend failed: {err}"),
        }
    }
}

pub fn speak(text: &str, lang: &str) -> Result<(), SpeechError> {
    spawn_speaker(text, lang).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            SpeechError::Unsupported
        } else {
            SpeechError::Failed(err)
        }
    })
}

#[cfg(target_os = "macos")]
fn spawn_speaker(text: &str, _lang: &str) -> io::Result<()> {
    std::process::Command::new("say").arg(text).spawn().map(|_| ())
}

#[cfg(target_os = "linux")]
fn spawn_speaker(text: &str, lang: &str) -> io::Result<()> {
    let voice = lang.split('-').next().unwrap_or("en");
    match std::process::Command::new("espeak")
        .args(["-v", voice])
        .arg(text)
        .spawn()
    {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            std::process::Command::new("spd-say")
                .args(["-l", voice])
                .arg(text)
                .spawn()
                .map(|_| ())
        }
        Err(err) => Err(err),
    }
}

#[cfg(target_os = "windows")]
fn spawn_speaker(text: &str, _lang: &str) -> io::Result<()> {
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}')",
        text.replace('\'', "''")
    );
    std::process::Command::new("powershell")
        .args(["-NoProfile", "-Command", &script])
        .spawn()
        .map(|_| ())
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn spawn_speaker(_text: &str, _lang: &str) -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no speech backend"))
}
