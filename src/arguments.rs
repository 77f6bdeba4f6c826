//! Encoding a whole function argument table
//!
//! A device function declares its arguments by name, slot index and data type.
//! [`encode_arguments`] walks those declarations, looks up each argument's
//! value by name and offers it to a chain of [`ArgumentEncoding`]s. The first
//! encoder that writes bytes for a slot wins; encoders that do not recognize
//! the value leave the slot alone, so the next one gets its turn.

use crate::dtype::ArgumentType;
use crate::encoder::{ArgumentEncoding, ByteSink};
use crate::error::Result;
use log::debug;
use std::any::Any;
use std::collections::HashMap;

/// Declaration of one function argument
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    /// Argument name, the key into the value map
    pub name: String,
    /// Slot index the argument is bound to
    pub index: u32,
    /// Declared type of the slot
    pub argument_type: ArgumentType,
}

impl ArgumentDescriptor {
    /// Creates a descriptor
    pub fn new(name: impl Into<String>, index: u32, argument_type: impl Into<ArgumentType>) -> Self {
        Self {
            name: name.into(),
            index,
            argument_type: argument_type.into(),
        }
    }
}

/// Destination of encoded argument bytes, addressed by slot index
pub trait ArgumentSink {
    /// Store `bytes` as the contents of slot `index`
    fn set_bytes(&mut self, index: u32, bytes: &[u8]);
}

/// Forwards an encoder's writes to one slot of an [`ArgumentSink`]
struct ArgumentProxy<'a> {
    sink: &'a mut dyn ArgumentSink,
    index: u32,
    encoded: bool,
}

impl<'a> ArgumentProxy<'a> {
    fn new(sink: &'a mut dyn ArgumentSink, index: u32) -> Self {
        Self {
            sink,
            index,
            encoded: false,
        }
    }
}

impl ByteSink for ArgumentProxy<'_> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.sink.set_bytes(self.index, bytes);
        self.encoded = true;
        Ok(())
    }
}

/// Encode every argument that has a value into `sink`
///
/// Arguments are visited in declaration order. For each one, `encoders` are
/// tried in order until one writes bytes. An encoder error aborts the whole
/// call; slots already written stay written.
///
/// Arguments with no entry in `values`, and values no encoder handles, are
/// skipped.
pub fn encode_arguments(
    arguments: &[ArgumentDescriptor],
    values: &HashMap<String, Box<dyn Any>>,
    encoders: &[&dyn ArgumentEncoding],
    sink: &mut dyn ArgumentSink,
) -> Result<()> {
    for argument in arguments {
        let Some(value) = values.get(&argument.name) else {
            debug!("no value for argument {:?}, skipping", argument.name);
            continue;
        };

        let mut encoded = false;
        for encoder in encoders {
            let mut proxy = ArgumentProxy::new(&mut *sink, argument.index);
            encoder.encode_value(&**value, &argument.argument_type, &mut proxy)?;
            if proxy.encoded {
                encoded = true;
                break;
            }
        }

        if !encoded {
            debug!(
                "no encoder handled argument {:?} at index {}",
                argument.name, argument.index
            );
        }
    }
    Ok(())
}
