// SPDX-License-Identifier: Apache-2.0

use crate::number_handler::{F64Handler, NumberHandler};

/// Nesting depth allowed by [`ParseOptions::new`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration for a parse.
///
/// ```
/// use strictjson::{ParseOptions, RawHandler};
///
/// let options = ParseOptions::new()
///     .with_number_handler(RawHandler)
///     .with_max_depth(16);
/// assert_eq!(options.max_depth(), Some(16));
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions<H = F64Handler> {
    number_handler: H,
    max_depth: Option<usize>,
}

impl ParseOptions<F64Handler> {
    /// Default numbers (`f64`) and a nesting limit of [`DEFAULT_MAX_DEPTH`].
    pub fn new() -> Self {
        Self {
            number_handler: F64Handler,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl Default for ParseOptions<F64Handler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ParseOptions<H> {
    /// Replaces the number handler, changing the number type of parsed values.
    pub fn with_number_handler<T: NumberHandler>(self, number_handler: T) -> ParseOptions<T> {
        ParseOptions {
            number_handler,
            max_depth: self.max_depth,
        }
    }

    /// Maximum number of nested arrays/objects. A depth of 0 only admits scalars.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Removes the nesting limit; depth is then bounded only by the call stack.
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn number_handler(&self) -> &H {
        &self.number_handler
    }
}
