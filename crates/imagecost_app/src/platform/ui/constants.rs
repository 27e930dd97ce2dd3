pub const TITLE: &str = "OpenAI Image Generation Cost Calculator";
pub const PROMPT: &str = "> ";

/// Ends a multi-line `paste` block.
pub const BLOCK_TERMINATOR: &str = ".";

pub const CMD_SNIPPET: &str = "snippet";
pub const CMD_PASTE: &str = "paste";
pub const CMD_CLEAR: &str = "clear";
pub const CMD_TEXT: &str = "text";
pub const CMD_IMAGE: &str = "image";
pub const CMD_OUTPUT: &str = "output";
pub const CMD_EXAMPLE: &str = "example";
pub const CMD_SHOW: &str = "show";
pub const CMD_HELP: &str = "help";
pub const CMD_QUIT: &str = "quit";
pub const CMD_EXIT: &str = "exit";

pub const HELP_LINES: &[&str] = &[
    "Paste your OpenAI image generation snippet or enter token counts manually.",
    "",
    "  snippet <text>   replace the snippet (alias: paste <text>)",
    "  paste            start a multi-line snippet; finish with a line containing only '.'",
    "  clear            empty the snippet and the token fields",
    "  text <n>         set text input tokens (no value unsets the field)",
    "  image <n>        set image input tokens",
    "  output <n>       set output tokens",
    "  example          show what a Playground snippet looks like",
    "  show             print the current state",
    "  help             print this help",
    "  quit             leave (also: exit, end of input)",
];
