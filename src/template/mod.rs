//! Annotated template files.
//!
//! A template is a `.env`-style file whose variable lines may carry JSON
//! settings. Reading a template yields the questions still to be asked;
//! writing one substitutes resolved values back into it.
//!
//! # Syntax
//!
//! ```text
//! # Annotation shown above the prompt
//! VAR_NAME={"type":"integer","default":"shell(echo 5)","example":"42","ask":true}
//! OTHER_VAR=hardcoded-literal-value
//! # {start IGNORE_IN_PROMPT}
//! ...never prompted...
//! # {end IGNORE_IN_PROMPT}
//! ```

pub mod paths;
mod reader;
mod syntax;
mod writer;


pub use paths::{
    TEMPLATE_SUFFIX, destination_from_template, scope_from_template_path, template_for,
};
pub use reader::{import_destination, read_questions};
pub use writer::{render_destination, write_destination, write_destinations};
