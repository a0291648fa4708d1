// Constants for the pseudo-interpreter

/// Imports every session starts with
pub const STANDARD_IMPORTS: [&str; 3] = ["java.lang.*", "java.util.*", "java.io.*"];

/// Case-insensitive command that ends a session
pub const EXIT_COMMAND: &str = "exit()";

/// Output of a successful `System.exit(...)` call
pub const PROCESS_FINISHED: &str = "Process finished with exit code 0";

/// Response for any method the canned table does not know
pub const UNKNOWN_METHOD_RESPONSE: &str = "null";
