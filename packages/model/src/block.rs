use crate::activity::ActivityData;
use serde::{Deserialize, Serialize};

/// Opaque block identifier, unique within one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub String);

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an image or audio asset comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssetSource {
    /// A file uploaded for this moment; resolved against
    /// `./{momentId}/img/{filename}` or `./{momentId}/audio/{filename}`.
    Uploaded { filename: String },
    /// A previously resolved reference, carried verbatim.
    Resolved { url: String },
}

impl AssetSource {
    /// Resolve to the src path the generated markup uses.
    pub fn resolve(&self, moment_id: &str, folder: &str) -> String {
        match self {
            AssetSource::Uploaded { filename } => {
                format!("./{}/{}/{}", moment_id, folder, filename)
            }
            AssetSource::Resolved { url } => url.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AssetSource::Uploaded { filename } => filename.is_empty(),
            AssetSource::Resolved { url } => url.is_empty(),
        }
    }
}

/// One typed unit of authored content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: BlockId,
    #[serde(flatten)]
    pub kind: BlockKind,
}

/// The block variants. Text fields are inserted into markup verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    #[serde(rename = "heading")]
    Heading { text: String, subtitle: String },

    #[serde(rename = "paragraph")]
    Paragraph {
        text: String,
        highlight: String,
        theme: String,
    },

    #[serde(rename = "instruction")]
    Instruction { text: String },

    #[serde(rename = "image")]
    Image { source: AssetSource },

    #[serde(rename = "audio")]
    Audio {
        source: AssetSource,
        /// Transcript payload as authored; opaque to the renderer.
        transcript: serde_json::Value,
    },

    #[serde(rename = "button")]
    Button { label: String },

    /// Static table; rendered from a fixed template.
    #[serde(rename = "table")]
    Table,

    #[serde(rename = "video")]
    Video { video_id: String },

    #[serde(rename = "activity")]
    Activity { data: ActivityData },
}

impl BlockKind {
    /// The code used in serialized form and in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Heading { .. } => "heading",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::Instruction { .. } => "instruction",
            BlockKind::Image { .. } => "image",
            BlockKind::Audio { .. } => "audio",
            BlockKind::Button { .. } => "button",
            BlockKind::Table => "table",
            BlockKind::Video { .. } => "video",
            BlockKind::Activity { .. } => "activity",
        }
    }

    pub fn as_activity(&self) -> Option<&ActivityData> {
        match self {
            BlockKind::Activity { data } => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_resolution() {
        let uploaded = AssetSource::Uploaded {
            filename: "foto.png".to_string(),
        };
        assert_eq!(uploaded.resolve("m-42", "img"), "./m-42/img/foto.png");

        let resolved = AssetSource::Resolved {
            url: "https://cdn.example/a.mp3".to_string(),
        };
        assert_eq!(resolved.resolve("m-42", "audio"), "https://cdn.example/a.mp3");
    }

    #[test]
    fn test_block_serde_tag() {
        let block = ContentBlock {
            id: BlockId("b-1".to_string()),
            kind: BlockKind::Heading {
                text: "Hola".to_string(),
                subtitle: String::new(),
            },
        };
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"heading\""));

        let back: ContentBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
