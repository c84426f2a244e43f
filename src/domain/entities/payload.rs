use serde::Serialize;

/// Who gets to see a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Visible to the whole channel
    InChannel,
}

/// Text object inside a section block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    Mrkdwn,
}

impl TextObject {
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Mrkdwn,
            text: text.into(),
        }
    }
}

/// A layout block understood by the chat platform's renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Divider,
    Section { text: TextObject },
}

impl Block {
    pub fn section(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::markdown(text),
        }
    }
}

/// Reply posted back to a command's callback URL.
///
/// Built once per request and never mutated afterwards; the builder methods
/// consume `self`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyPayload {
    pub blocks: Vec<Block>,
    pub response_type: ResponseType,
}

impl ReplyPayload {
    /// Empty channel-visible reply
    pub fn in_channel() -> Self {
        Self {
            blocks: Vec::new(),
            response_type: ResponseType::InChannel,
        }
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Serialize to the JSON body sent on delivery
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
