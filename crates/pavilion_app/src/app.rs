use std::io::{BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pavilion_core::{update, AppState, Msg};
use site_logging::site_info;

use crate::commands::{self, Command};
use crate::effects::EffectRunner;
use crate::ui;

pub fn run() {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(msg_tx);

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut state = AppState::new();
    println!("{}", ui::render::render(&state.view()));
    print_prompt();

    loop {
        let mut render_pending = false;

        // Engine completions and timer expirations first.
        while let Ok(msg) = msg_rx.try_recv() {
            render_pending |= dispatch(&mut state, &effects, msg);
        }

        match line_rx.try_recv() {
            Ok(line) => match commands::parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    println!("{}", commands::HELP);
                    print_prompt();
                }
                Ok(Command::Dispatch(msg)) => {
                    if submit_allowed(&state, &msg) {
                        render_pending |= dispatch(&mut state, &effects, msg);
                    } else {
                        println!("Required fields are missing; nothing was submitted.");
                        print_prompt();
                    }
                }
                Err(usage) => {
                    println!("{usage}");
                    print_prompt();
                }
            },
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => break,
        }

        if render_pending {
            println!("{}", ui::render::render(&state.view()));
            print_prompt();
        }

        thread::sleep(Duration::from_millis(20));
    }

    site_info!("shell exited");
}

fn dispatch(state: &mut AppState, effects: &EffectRunner, msg: Msg) -> bool {
    let current = std::mem::take(state);
    let (mut next, effs) = update(current, msg);
    effects.enqueue(effs);
    let was_dirty = next.consume_dirty();
    *state = next;
    was_dirty
}

/// The input layer's required-field gate: an incomplete form never reaches
/// the submission logic, which does not revalidate. An in-flight submission
/// still passes through so the core's re-entrancy guard can no-op it.
fn submit_allowed(state: &AppState, msg: &Msg) -> bool {
    let view = state.view();
    match msg {
        Msg::ContactSubmitted => view.contact.submitting || view.contact.can_submit,
        Msg::CareersSubmitted => view.careers.submitting || view.careers.can_submit,
        _ => true,
    }
}

fn print_prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
