use crate::application::errors::RelayError;
use crate::domain::entities::{Block, CommandName, InboundRequest, ReplyPayload};

/// Subject used when `/rollfor` is sent without one
pub const DEFAULT_ROLL_SUBJECT: &str = "initiative";

/// Markdown emphasis markers that would break the outer `*...*` in a reply
const EMPHASIS_MARKERS: [char; 3] = ['*', '_', '~'];

const ROLL_SUFFIX: &str = ":tada: :tada: :tada:";

/// Result of running one command handler. `None` means nothing to deliver.
pub type HandlerResult = Result<Option<ReplyPayload>, RelayError>;

/// Runs the fixed set of slash commands
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandService;

impl CommandService {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, command: CommandName, request: &InboundRequest) -> HandlerResult {
        match command {
            CommandName::Divider => divider(request),
            CommandName::RollFor => roll_for(request),
        }
    }

    pub fn get_help(&self) -> String {
        let mut help = "Available commands:\n".to_string();
        for command in CommandName::ALL {
            help.push_str(&format!("  {} - {}\n", command.usage(), command.description()));
        }
        help
    }
}

fn divider(_request: &InboundRequest) -> HandlerResult {
    Ok(Some(ReplyPayload::in_channel().with_block(Block::Divider)))
}

fn roll_for(request: &InboundRequest) -> HandlerResult {
    let subject = clean_subject(request.required("text")?);
    let user_id = request.required("user_id")?;

    let text = format!("<@{}> *Roll for {}* {}", user_id, subject, ROLL_SUFFIX);

    Ok(Some(
        ReplyPayload::in_channel()
            .with_block(Block::Divider)
            .with_block(Block::section(text)),
    ))
}

/// Strip emphasis markers, then trim, then fall back to the default subject.
pub fn clean_subject(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !EMPHASIS_MARKERS.contains(c)).collect();
    let trimmed = stripped.trim();

    if trimmed.is_empty() {
        DEFAULT_ROLL_SUBJECT.to_string()
    } else {
        trimmed.to_string()
    }
}
