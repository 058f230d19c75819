use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chat::{ChatSession, Persona};
use crate::errors::{AppError, AppResult};
use crate::models::message::{ChatMessage, Role};
use crate::ui::messages::{header, toast_error};
use crate::utils::colors::{BLUE, GREEN, GREY, RESET};
use crate::utils::formatting::wrap_text;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

const WRAP: usize = 60;

pub fn handle(cmd: &Commands, cfg: &Config, test_mode: bool) -> AppResult<()> {
    if let Commands::Chat {
        text,
        image,
        persona,
    } = cmd
    {
        let (text_delay, image_delay) = if test_mode {
            (Duration::ZERO, Duration::ZERO)
        } else {
            (cfg.chat_delay(), cfg.image_delay())
        };
        let mut session = ChatSession::new(*persona, text_delay, image_delay);

        if let Some(path) = image {
            if *persona != Persona::Diet {
                return Err(AppError::Other(
                    "photos can only be shared with the diet assistant".into(),
                ));
            }
            // any text rides along as the photo caption
            return send_image(&mut session, Path::new(path), text.as_deref());
        }

        match text {
            Some(t) => ask(&mut session, t),
            None => interactive(&mut session)?,
        }
    }
    Ok(())
}

fn send_image(session: &mut ChatSession, path: &Path, caption: Option<&str>) -> AppResult<()> {
    typing();
    match session.send_image(path, caption) {
        Ok(reply) => {
            print_message(reply);
            Ok(())
        }
        Err(e @ AppError::InvalidImage(_)) => {
            toast_error("文件格式错误", "请上传图片文件");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

fn ask(session: &mut ChatSession, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    typing();
    if let Some(reply) = session.send(text) {
        print_message(reply);
    }
}

fn interactive(session: &mut ChatSession) -> AppResult<()> {
    header(match session.persona() {
        Persona::Diet => "智能饮食助手",
        Persona::Health => "健康管家",
    });
    println!("{GREY}与AI对话，获取个性化饮食建议 (exit / quit to leave){RESET}\n");

    for msg in session.messages() {
        print_message(msg);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{BLUE}你>{RESET} ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let input = line.trim();

        if matches!(input, "exit" | "quit") {
            break;
        }
        ask(session, input);
    }

    Ok(())
}

fn typing() {
    println!("{GREY}…{RESET}");
}

fn print_message(msg: &ChatMessage) {
    let (who, color) = match msg.role {
        Role::User => ("你", BLUE),
        Role::Assistant => ("助手", GREEN),
    };
    println!("{color}{who}{RESET} {GREY}{}{RESET}", msg.time_str());
    if let Some(img) = &msg.image {
        println!("  🖼  {} ({}, {} bytes)", img.path, img.mime, img.size);
    }
    println!("{}\n", wrap_text(&msg.content, WRAP, "  "));
}
