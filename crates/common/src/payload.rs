//! Payloads of the gameroom smart contracts.
//!
//! Both contracts take a UTF-8 string of comma separated fields led by the
//! entity name and the action. Contract state joins records with `|`, so
//! neither separator may appear inside a field.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const FIELD_SEPARATOR: char = ',';
const RECORD_SEPARATOR: char = '|';

fn check_field(field: &'static str, value: &str) -> Result<(), Error> {
    if value.contains(FIELD_SEPARATOR) || value.contains(RECORD_SEPARATOR) {
        return Err(Error::InvalidPayload(format!(
            "{} cannot contain '{}' or '{}'",
            field, FIELD_SEPARATOR, RECORD_SEPARATOR
        )));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::InvalidPayload("Name is required".to_string()));
    }
    check_field("name", name)
}

fn payload_str(bytes: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(bytes)
        .map_err(|_| Error::InvalidPayload("Invalid payload serialization".to_string()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageAction {
    Create,
    Add,
    Delete,
}

impl fmt::Display for MessageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            MessageAction::Create => "create",
            MessageAction::Add => "add",
            MessageAction::Delete => "delete",
        };
        write!(f, "{}", action)
    }
}

impl FromStr for MessageAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(MessageAction::Create),
            "add" => Ok(MessageAction::Add),
            "delete" => Ok(MessageAction::Delete),
            other => Err(Error::InvalidPayload(format!("Invalid action: '{}'", other))),
        }
    }
}

/// `name,action,content` for the message contract. A game (chat) is
/// created with an empty content field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessagePayload {
    name: String,
    action: MessageAction,
    content: String,
}

impl MessagePayload {
    pub fn new(name: &str, action: MessageAction, content: &str) -> Result<Self, Error> {
        check_name(name)?;
        check_field("content", content)?;
        Ok(MessagePayload {
            name: name.to_string(),
            action,
            content: content.to_string(),
        })
    }

    pub fn create(name: &str) -> Result<Self, Error> {
        Self::new(name, MessageAction::Create, "")
    }

    pub fn add(name: &str, content: &str) -> Result<Self, Error> {
        Self::new(name, MessageAction::Add, content)
    }

    pub fn delete(name: &str) -> Result<Self, Error> {
        Self::new(name, MessageAction::Delete, "")
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        let items: Vec<&str> = payload_str(bytes)?.split(FIELD_SEPARATOR).collect();
        match items.as_slice() {
            [name, action, content] => {
                if action.is_empty() {
                    return Err(Error::InvalidPayload("Action is required".to_string()));
                }
                Self::new(name, action.parse()?, content)
            }
            _ => Err(Error::InvalidPayload(
                "Payload must have exactly 2 commas".to_string(),
            )),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> MessageAction {
        self.action
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for MessagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.action, self.content)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusAction {
    Create,
    Delay,
    Prepone,
    Delete,
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            StatusAction::Create => "create",
            StatusAction::Delay => "delay",
            StatusAction::Prepone => "prepone",
            StatusAction::Delete => "delete",
        };
        write!(f, "{}", action)
    }
}

impl FromStr for StatusAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(StatusAction::Create),
            "delay" => Ok(StatusAction::Delay),
            "prepone" => Ok(StatusAction::Prepone),
            "delete" => Ok(StatusAction::Delete),
            other => Err(Error::InvalidPayload(format!("Invalid action: {}", other))),
        }
    }
}

/// Vessel call fields carried by a status update, in payload order. Empty
/// fields leave the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusFields {
    pub docking_type: String,
    pub eta: String,
    pub etb: String,
    pub ata: String,
    pub eto: String,
    pub ato: String,
    pub etc: String,
    pub etd: String,
    pub is_bunkering: String,
    pub bunkering_time: String,
    pub logs: String,
}

pub const STATUS_FIELD_COUNT: usize = 11;

impl StatusFields {
    fn as_array(&self) -> [(&'static str, &str); STATUS_FIELD_COUNT] {
        [
            ("docking_type", self.docking_type.as_str()),
            ("eta", self.eta.as_str()),
            ("etb", self.etb.as_str()),
            ("ata", self.ata.as_str()),
            ("eto", self.eto.as_str()),
            ("ato", self.ato.as_str()),
            ("etc", self.etc.as_str()),
            ("etd", self.etd.as_str()),
            ("is_bunkering", self.is_bunkering.as_str()),
            ("bunkering_time", self.bunkering_time.as_str()),
            ("logs", self.logs.as_str()),
        ]
    }

    fn from_items(items: &[&str]) -> Self {
        let field = |i: usize| items.get(i).map(|s| s.to_string()).unwrap_or_default();
        StatusFields {
            docking_type: field(0),
            eta: field(1),
            etb: field(2),
            ata: field(3),
            eto: field(4),
            ato: field(5),
            etc: field(6),
            etd: field(7),
            is_bunkering: field(8),
            bunkering_time: field(9),
            logs: field(10),
        }
    }
}

/// `name,action,f1,..,f11` for the status contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusPayload {
    name: String,
    action: StatusAction,
    fields: StatusFields,
}

impl StatusPayload {
    pub fn new(name: &str, action: StatusAction, fields: StatusFields) -> Result<Self, Error> {
        check_name(name)?;
        for (field, value) in fields.as_array() {
            check_field(field, value)?;
        }
        Ok(StatusPayload {
            name: name.to_string(),
            action,
            fields,
        })
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        let items: Vec<&str> = payload_str(bytes)?.split(FIELD_SEPARATOR).collect();
        if items.len() != STATUS_FIELD_COUNT + 2 {
            return Err(Error::InvalidPayload(
                "Payload must have exactly 12 commas".to_string(),
            ));
        }
        if items[1].is_empty() {
            return Err(Error::InvalidPayload("Action is required".to_string()));
        }
        Self::new(
            items[0],
            items[1].parse()?,
            StatusFields::from_items(&items[2..]),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> StatusAction {
        self.action
    }

    pub fn fields(&self) -> &StatusFields {
        &self.fields
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for StatusPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.action)?;
        for (_, value) in self.fields.as_array() {
            write!(f, ",{}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_game_payload() {
        let payload = MessagePayload::create("first").unwrap();
        assert_eq!(payload.to_bytes(), b"first,create,");

        let payload = MessagePayload::add("first", "hello friend").unwrap();
        assert_eq!(payload.to_string(), "first,add,hello friend");
        assert_eq!(MessagePayload::parse(&payload.to_bytes()).unwrap(), payload);
    }

    #[test]
    fn test_message_payload_validation() {
        assert!(MessagePayload::create("").is_err());
        assert!(MessagePayload::create("a|b").is_err());
        assert!(MessagePayload::create("a,b").is_err());
        assert!(MessagePayload::add("first", "hi, friend").is_err());

        assert!(MessagePayload::parse(b"first,create").is_err());
        assert!(MessagePayload::parse(b"first,,").is_err());
        assert!(MessagePayload::parse(b"first,take,").is_err());
        assert!(MessagePayload::parse(&[0xff, b',', b',']).is_err());
        assert_eq!(
            MessagePayload::parse(b"first,delete,").unwrap().action(),
            MessageAction::Delete
        );
    }

    #[test]
    fn test_status_payload() {
        let fields = StatusFields {
            docking_type: "LOADING".into(),
            eta: "3600".into(),
            logs: "berth 4".into(),
            ..Default::default()
        };
        let payload = StatusPayload::new("vessel", StatusAction::Delay, fields.clone()).unwrap();
        let encoded = payload.to_string();
        assert_eq!(encoded, "vessel,delay,LOADING,3600,,,,,,,,,berth 4");
        assert_eq!(encoded.matches(',').count(), 12);

        let parsed = StatusPayload::parse(encoded.as_bytes()).unwrap();
        assert_eq!(parsed.fields(), &fields);
        assert_eq!(parsed.action(), StatusAction::Delay);
    }

    #[test]
    fn test_status_payload_validation() {
        assert!(StatusPayload::parse(b"vessel,create,,,").is_err());
        assert!(StatusPayload::parse(b"vessel,sink,,,,,,,,,,,").is_err());
        assert!(StatusPayload::parse(b",create,,,,,,,,,,,").is_err());
        assert!(StatusPayload::parse(b"vessel,prepone,,,,,,,,,,,").is_ok());

        let fields = StatusFields {
            logs: "a|b".into(),
            ..Default::default()
        };
        assert!(StatusPayload::new("vessel", StatusAction::Create, fields).is_err());
    }
}
