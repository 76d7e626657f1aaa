pub mod emblfix_commands;
pub mod pipeline;
pub mod positional;
