use std::process;

use clap::{Arg, Command};

use taskhub_cli::commands::auth::{handle_auth, handle_login, handle_logout, handle_register};
use taskhub_cli::commands::groups::{
    handle_create_group, handle_group, handle_groups, handle_remove_member,
};
use taskhub_cli::commands::invites::{handle_invite_accept, handle_invite_create};
use taskhub_cli::commands::tasks::{
    handle_create_task, handle_delete_task, handle_task, handle_tasks, handle_update_task,
};
use taskhub_cli::commands::whoami::handle_whoami;
use taskhub_cli::interactive::run_dashboard;

#[tokio::main]
async fn main() {
    let app = Command::new("taskhub")
        .about("TaskHub CLI - Manage your groups and tasks from the command line")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("login")
                .about("Log in and save the session token")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .value_name("EMAIL")
                        .help("Account email"),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .short('p')
                        .value_name("PASSWORD")
                        .help("Account password"),
                ),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account and log in")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .value_name("NAME")
                        .help("Full name"),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .value_name("EMAIL")
                        .help("Account email"),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .short('p')
                        .value_name("PASSWORD")
                        .help("Account password"),
                ),
        )
        .subcommand(Command::new("logout").about("Drop the saved session"))
        .subcommand(
            Command::new("auth")
                .about("Inspect or set the session token directly")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Set the bearer token manually")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current token (masked)")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("whoami").about("Show the logged-in user"))
        .subcommand(
            Command::new("groups").about("List your groups").arg(
                Arg::new("format")
                    .long("format")
                    .short('f')
                    .value_name("FORMAT")
                    .help("Output format: table, json")
                    .default_value("table"),
            ),
        )
        .subcommand(
            Command::new("group")
                .about("Show one group with its members and tasks")
                .arg(
                    Arg::new("id")
                        .value_name("GROUP_ID")
                        .help("Group ID")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("create")
                .about("Create TaskHub resources")
                .subcommand_required(true)
                .subcommand(
                    Command::new("group")
                        .about("Create a new group")
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .short('n')
                                .value_name("NAME")
                                .help("Group name")
                                .required(true),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .value_name("TEXT")
                                .help("Group description"),
                        ),
                )
                .subcommand(
                    Command::new("task")
                        .about("Create a new task")
                        .arg(
                            Arg::new("title")
                                .value_name("TITLE")
                                .help("Task title")
                                .required(true),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .value_name("TEXT")
                                .help("Task description"),
                        )
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .short('s')
                                .value_name("STATUS")
                                .help("Initial status: todo, inprogress, done")
                                .default_value("todo"),
                        )
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .value_name("DATE")
                                .help("Deadline as YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("group")
                                .long("group")
                                .short('g')
                                .value_name("GROUP_ID")
                                .help("Attach the task to a group"),
                        )
                        .arg(
                            Arg::new("personal")
                                .long("personal")
                                .help("Force a personal task, ignoring the default group")
                                .action(clap::ArgAction::SetTrue),
                        )
                        .arg(
                            Arg::new("edit")
                                .long("edit")
                                .help("Open $EDITOR to write the description")
                                .action(clap::ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Update TaskHub resources")
                .subcommand_required(true)
                .subcommand(
                    Command::new("task")
                        .about("Update an existing task")
                        .arg(
                            Arg::new("id")
                                .value_name("TASK_ID")
                                .help("Task ID")
                                .required(true),
                        )
                        .arg(
                            Arg::new("title")
                                .long("title")
                                .short('t')
                                .value_name("TITLE")
                                .help("New title"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .value_name("TEXT")
                                .help("New description"),
                        )
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .short('s')
                                .value_name("STATUS")
                                .help("New status: todo, inprogress, done"),
                        )
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .value_name("DATE")
                                .help("New deadline as YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("group")
                                .long("group")
                                .short('g')
                                .value_name("GROUP_ID")
                                .help("Move the task into a group"),
                        )
                        .arg(
                            Arg::new("personal")
                                .long("personal")
                                .help("Detach the task from its group")
                                .action(clap::ArgAction::SetTrue),
                        )
                        .arg(
                            Arg::new("edit")
                                .long("edit")
                                .help("Open $EDITOR on the current description")
                                .action(clap::ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete TaskHub resources")
                .subcommand_required(true)
                .subcommand(
                    Command::new("task")
                        .about("Delete a task")
                        .arg(
                            Arg::new("id")
                                .value_name("TASK_ID")
                                .help("Task ID")
                                .required(true),
                        )
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .help("Skip the confirmation prompt")
                                .action(clap::ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("tasks")
                .about("List and filter tasks")
                .arg(
                    Arg::new("group")
                        .long("group")
                        .short('g')
                        .value_name("GROUP_ID")
                        .help("Only tasks of this group"),
                )
                .arg(
                    Arg::new("status")
                        .long("status")
                        .short('s')
                        .value_name("STATUS")
                        .help("Filter by status: todo, inprogress, done"),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .value_name("QUERY")
                        .help("Search in task titles and descriptions"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, table, json")
                        .default_value("simple"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('l')
                        .value_name("NUMBER")
                        .help("Limit number of results")
                        .default_value("50"),
                ),
        )
        .subcommand(
            Command::new("task").about("Show a single task").arg(
                Arg::new("id")
                    .value_name("TASK_ID")
                    .help("Task ID (or unique prefix)")
                    .required(true),
            ),
        )
        .subcommand(
            Command::new("invite")
                .about("Create and redeem group invites")
                .subcommand_required(true)
                .subcommand(
                    Command::new("create")
                        .about("Create an invite code for a group")
                        .arg(
                            Arg::new("group-id")
                                .value_name("GROUP_ID")
                                .help("Group to invite into")
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("accept")
                        .about("Join a group with an invite code or link")
                        .arg(
                            Arg::new("code")
                                .value_name("CODE_OR_LINK")
                                .help("Invite code, or a link carrying ?token=")
                                .required(true),
                        ),
                ),
        )
        .subcommand(
            Command::new("remove-member")
                .about("Remove a member from a group you own")
                .arg(
                    Arg::new("group-id")
                        .value_name("GROUP_ID")
                        .help("Group ID")
                        .required(true),
                )
                .arg(
                    Arg::new("user-id")
                        .value_name("USER_ID")
                        .help("Member to remove")
                        .required(true),
                ),
        )
        .subcommand(Command::new("board").about("Open the interactive dashboard"));

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("login", sub_matches)) => handle_login(sub_matches).await,
        Some(("register", sub_matches)) => handle_register(sub_matches).await,
        Some(("logout", sub_matches)) => handle_logout(sub_matches).await,
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("whoami", sub_matches)) => handle_whoami(sub_matches).await,
        Some(("groups", sub_matches)) => handle_groups(sub_matches).await,
        Some(("group", sub_matches)) => handle_group(sub_matches).await,
        Some(("create", sub_matches)) => match sub_matches.subcommand() {
            Some(("group", group_matches)) => handle_create_group(group_matches).await,
            Some(("task", task_matches)) => handle_create_task(task_matches).await,
            _ => {
                eprintln!("Unknown create subcommand. Use 'taskhub create --help' for available options.");
                process::exit(1);
            }
        },
        Some(("update", sub_matches)) => match sub_matches.subcommand() {
            Some(("task", task_matches)) => handle_update_task(task_matches).await,
            _ => {
                eprintln!("Unknown update subcommand. Use 'taskhub update --help' for available options.");
                process::exit(1);
            }
        },
        Some(("delete", sub_matches)) => match sub_matches.subcommand() {
            Some(("task", task_matches)) => handle_delete_task(task_matches).await,
            _ => {
                eprintln!("Unknown delete subcommand. Use 'taskhub delete --help' for available options.");
                process::exit(1);
            }
        },
        Some(("tasks", sub_matches)) => handle_tasks(sub_matches).await,
        Some(("task", sub_matches)) => handle_task(sub_matches).await,
        Some(("invite", sub_matches)) => match sub_matches.subcommand() {
            Some(("create", invite_matches)) => handle_invite_create(invite_matches).await,
            Some(("accept", invite_matches)) => handle_invite_accept(invite_matches).await,
            _ => {
                eprintln!("Unknown invite subcommand. Use 'taskhub invite --help' for available options.");
                process::exit(1);
            }
        },
        Some(("remove-member", sub_matches)) => handle_remove_member(sub_matches).await,
        Some(("board", _)) => run_dashboard().await,
        _ => {
            eprintln!("Unknown command. Use 'taskhub --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
