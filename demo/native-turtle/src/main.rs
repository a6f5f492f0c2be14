// logo/demo/native-turtle/src/main.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Plays a LOGO script through a drawing scene without a window.

mod animator;

use anyhow::{Context, Result};
use clap::{App, Arg};
use logo_turtle::{
    demonstration_script, DrawingScene, SceneOptions, TurtleEvent, TURTLE_HEIGHT, TURTLE_WIDTH,
};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = App::new("logo-demo")
        .about("Plays a LOGO script through a headless turtle scene")
        .arg(
            Arg::with_name("SCRIPT")
                .help("LOGO script to run instead of the built-in square")
                .index(1),
        )
        .arg(
            Arg::with_name("speed")
                .long("speed")
                .short("s")
                .takes_value(true)
                .help("Initial turtle speed"),
        )
        .arg(
            Arg::with_name("transcript")
                .long("transcript")
                .short("t")
                .takes_value(true)
                .value_name("FILE")
                .help("Writes the started events to FILE as JSON"),
        )
        .get_matches();

    let script = match matches.value_of("SCRIPT") {
        Some(path) => {
            let source =
                fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
            uturtle::parse_commands(&source).with_context(|| format!("failed to parse {}", path))?
        }
        None => demonstration_script(),
    };

    let mut options = SceneOptions::default();
    if let Some(speed) = matches.value_of("speed") {
        options.speed = speed
            .parse()
            .with_context(|| format!("invalid speed {:?}", speed))?;
    }

    let mut scene = DrawingScene::with_script(options, script)?;
    let playback = animator::play(&mut scene)?;

    if let Some(path) = matches.value_of("transcript") {
        let file = File::create(path).with_context(|| format!("failed to create {}", path))?;
        write_transcript(file, &playback.events)
            .with_context(|| format!("failed to write {}", path))?;
        info!(path, events = playback.events.len(), "transcript written");
    }

    let turtle = scene.turtle();
    let bounds = scene.bounds();
    println!("position: {}", turtle.position());
    println!("heading:  {:.3}", turtle.heading());
    println!("pen:      {}", if turtle.is_pen_down() { "down" } else { "up" });
    println!("speed:    {}", turtle.speed());
    println!("strokes:  {}", scene.drawing().len());
    println!(
        "ink:      {:.3}",
        scene.drawing().iter().map(|stroke| stroke.length()).sum::<f64>()
    );
    println!("rejected: {}", scene.rejected());
    println!(
        "bounds:   {} - {} ({:.3} x {:.3})",
        bounds.origin(),
        bounds.lower_right(),
        bounds.width(),
        bounds.height()
    );
    println!("icon:     {}x{}", TURTLE_WIDTH, TURTLE_HEIGHT);
    println!("time:     {:.3}s", playback.elapsed.as_secs_f64());
    Ok(())
}

/// Writes the events as pretty JSON. The buffer is flushed explicitly so a
/// failed write surfaces as an error instead of being dropped.
fn write_transcript<W: Write>(sink: W, events: &[TurtleEvent]) -> Result<()> {
    let mut writer = BufWriter::new(sink);
    serde_json::to_writer_pretty(&mut writer, events)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_transcript;
    use logo_turtle::TurtleEvent;
    use std::io::{self, Write};

    struct Sink {
        written: Vec<u8>,
        fail_on_flush: bool,
    }

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.fail_on_flush {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn transcript_reaches_the_sink() {
        let events = vec![TurtleEvent::PenActionStarted { old: true, new: false }];
        let mut sink = Sink { written: Vec::new(), fail_on_flush: false };
        write_transcript(&mut sink, &events).unwrap();
        let parsed: Vec<TurtleEvent> = serde_json::from_slice(&sink.written).unwrap();
        assert_eq!(parsed, events);
    }

    #[test]
    fn transcript_flush_errors_are_reported() {
        let mut sink = Sink { written: Vec::new(), fail_on_flush: true };
        assert!(write_transcript(&mut sink, &[]).is_err());
    }
}
