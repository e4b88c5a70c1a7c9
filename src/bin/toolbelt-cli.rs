//! Generic command-line client for the Toolbelt service.
//!
//! Discovers tools from the server's manifest and invokes them by name.
//! Handled failures print a diagnostic and exit with code 1; the
//! interactive loop keeps running after any single failed call.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use toolbelt::{parse_kv_args, prompt_params, ClientConfig, Invocation, ToolClient};

#[derive(Parser, Debug)]
#[command(name = "toolbelt-cli")]
#[command(about = "Generic client for the Toolbelt tool service")]
#[command(version)]
struct Cli {
    /// Server base URL (overrides TOOLBELT_URL)
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all available tools from the server manifest
    List,
    /// Call a tool with key=value parameters
    Call {
        /// Tool name, e.g. `add`
        tool: String,
        /// Parameters as key=value pairs, e.g. `a=10 b=20`
        params: Vec<String>,
    },
    /// Interactive read-prompt-act loop
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };

    let client = match ToolClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Command::List => cmd_list(&client),
        Command::Call { tool, params } => cmd_call(&client, &tool, &params),
        Command::Interactive => cmd_interactive(&client),
    };
    std::process::exit(code);
}

fn cmd_list(client: &ToolClient) -> i32 {
    let manifest = match client.discover() {
        Ok(manifest) => manifest,
        Err(err) => {
            eprintln!("Error: {}", err);
            return 1;
        }
    };

    println!("\nAvailable tools:\n{}", "=".repeat(60));
    for (i, tool) in manifest.tools().iter().enumerate() {
        println!("\n{}. {}", i + 1, tool.name);
        println!("   Description: {}", tool.description);
        println!("   Endpoint: {}", tool.endpoint);
        println!("   Method: {}", tool.method);
    }
    println!("\n{}", "=".repeat(60));
    println!("Total tools: {}", manifest.tools().len());
    0
}

fn cmd_call(client: &ToolClient, tool: &str, raw_params: &[String]) -> i32 {
    let params = match parse_kv_args(raw_params) {
        Ok(params) => params,
        Err(err) => {
            eprintln!("Error: {}", err);
            return 1;
        }
    };
    invoke_and_print(client, tool, &params)
}

/// Invoke a tool and render the outcome. Returns the process exit code.
fn invoke_and_print(client: &ToolClient, tool: &str, params: &[(String, String)]) -> i32 {
    println!("\nCalling tool: {}", tool);
    match client.invoke(tool, params) {
        Ok(Invocation::Success(value)) => {
            println!("Success! Response:");
            println!("{}", "=".repeat(60));
            match serde_json::to_string_pretty(&value) {
                Ok(pretty) => println!("{}", pretty),
                Err(_) => println!("{}", value),
            }
            println!("{}", "=".repeat(60));
            0
        }
        Ok(Invocation::Failed { status, body }) => {
            eprintln!("Error: server returned status {}", status);
            eprintln!("{}", body);
            1
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            1
        }
    }
}

fn cmd_interactive(client: &ToolClient) -> i32 {
    if !client.check_server() {
        eprintln!("Error: server is not reachable at {}", client.base_url());
        eprintln!("  Hint: start it with `toolbelt` (or point TOOLBELT_URL at a running instance)");
        return 1;
    }
    println!("\nServer is running at {}", client.base_url());

    println!("{}", "=".repeat(60));
    println!("  Toolbelt - Interactive Mode");
    println!("{}", "=".repeat(60));

    let stdin = io::stdin();
    loop {
        println!("\nCommands:");
        println!("  list    - List all available tools");
        println!("  call    - Call a tool");
        println!("  exit    - Exit interactive mode");

        let line = match read_line(&stdin, "\n> ") {
            Some(line) => line,
            None => break, // EOF
        };

        match line.trim().to_lowercase().as_str() {
            "exit" => {
                println!("\nGoodbye!");
                break;
            }
            "list" => {
                let _ = cmd_list(client);
            }
            "call" => interactive_call(client, &stdin),
            "" => {}
            other => println!("Unknown command '{}'. Try: list, call, or exit", other),
        }
    }
    0
}

/// Prompt for a tool name and each of its parameters, then invoke.
/// A failed call prints a diagnostic and returns to the loop.
fn interactive_call(client: &ToolClient, stdin: &io::Stdin) {
    let manifest = match client.discover() {
        Ok(manifest) => manifest,
        Err(err) => {
            eprintln!("Error: {}", err);
            return;
        }
    };

    println!("\nAvailable tools:");
    for tool in manifest.tools() {
        println!("  {:<14} - {}", tool.name, tool.description);
    }

    let tool = match read_line(stdin, "\nEnter tool name: ") {
        Some(line) => line.trim().to_string(),
        None => return,
    };

    let prompts = match prompt_params(&tool) {
        Some(prompts) => prompts,
        None => {
            eprintln!(
                "Unknown tool '{}'. Available tools: {}",
                tool,
                manifest.tool_names().join(", ")
            );
            return;
        }
    };

    let mut params = Vec::with_capacity(prompts.len());
    for &name in prompts {
        let value = match read_line(stdin, &format!("Enter {}: ", name)) {
            Some(line) => line.trim().to_string(),
            None => return,
        };
        // Empty optional values fall back to server-side defaults
        if !value.is_empty() {
            params.push((name.to_string(), value));
        }
    }

    let _ = invoke_and_print(client, &tool, &params);
}

fn read_line(stdin: &io::Stdin, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(_) => None,
    }
}
