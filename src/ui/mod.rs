//! Terminal rendering and the command loop driving the form.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::CustomerApi;
use crate::form::{CustomerListForm, SubmitOutcome};

const HELP: &str = "\
Commands:
  list              show the customer list
  name <value>      set the name field
  email <value>     set the e-mail field
  submit            create a customer, or save the current edit
  edit <id>         edit a listed customer (pre-fills both fields)
  del <id>          delete a customer
  clear             blank both fields
  reload            refetch the list from the server
  help              show this message
  quit              exit";

/// Render the list and the form state.
fn render<C: CustomerApi>(form: &CustomerListForm<C>) {
    println!();
    println!("Customers ({})", form.customers().len());
    for customer in form.customers() {
        println!(
            "  [{}] Name: {} | E-mail: {} | Created At: {}",
            customer.id, customer.name, customer.email, customer.created_at
        );
    }

    let action = if form.edit_target().is_some() {
        "Update Customer"
    } else {
        "Add Customer"
    };
    println!(
        "Form: name=\"{}\" email=\"{}\" -> {}",
        form.name_input(),
        form.email_input(),
        action
    );
}

/// Run the interactive session until EOF or `quit`.
///
/// Failed operations are logged and the loop continues; the form itself
/// never retries.
pub async fn run<C: CustomerApi>(mut form: CustomerListForm<C>) -> Result<(), std::io::Error> {
    println!("{}", HELP);
    render(&form);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (line, ""),
        };

        match command {
            "" => {}
            "list" => render(&form),
            "name" => {
                form.set_name_input(rest);
                render(&form);
            }
            "email" => {
                form.set_email_input(rest);
                render(&form);
            }
            "submit" => {
                match form.submit().await {
                    Ok(SubmitOutcome::Created(id)) => println!("Created customer {}", id),
                    Ok(SubmitOutcome::Updated(id)) => println!("Updated customer {}", id),
                    Ok(SubmitOutcome::Ignored) => println!("Both fields are required"),
                    Err(e) => tracing::error!("Submit failed: {}", e),
                }
                render(&form);
            }
            "edit" => {
                match form
                    .customers()
                    .iter()
                    .find(|c| c.id == rest)
                    .map(|c| (c.id.clone(), c.name.clone(), c.email.clone()))
                {
                    Some((id, name, email)) => form.begin_edit(&id, &name, &email),
                    None => tracing::warn!("No customer with id {}", rest),
                }
                render(&form);
            }
            "del" => {
                if let Err(e) = form.delete(rest).await {
                    tracing::error!("Delete failed: {}", e);
                }
                render(&form);
            }
            "clear" => {
                form.clear_fields();
                render(&form);
            }
            "reload" => {
                if let Err(e) = form.load().await {
                    tracing::error!("Reload failed: {}", e);
                }
                render(&form);
            }
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }

    Ok(())
}
