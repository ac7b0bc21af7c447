use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use business::domain::ingredient::model::{IngredientCategory, StorageType};
use business::domain::ingredient::use_cases::create::CreateIngredientParams;
use business::domain::inventory::use_cases::add_entry::AddInventoryEntryParams;
use business::domain::purchase::errors::PurchaseError;
use business::domain::purchase::use_cases::confirm::ConfirmPurchaseParams;
use business::domain::shared::batch::BatchOutcome;

use crate::setup::dependency_injection::DependencyContainer;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Household grocery, recipe and shopping-list manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ingredient catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Recipe catalog
    Recipe {
        #[command(subcommand)]
        command: RecipeCommand,
    },
    /// Shopping list backed by the Draft cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },
    /// Stocked inventory
    Inventory {
        #[command(subcommand)]
        command: InventoryCommand,
    },
    /// Purchase history
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List all ingredients
    List,
    /// Add an ingredient
    Add {
        name: String,
        #[arg(long, value_parser = parse_category)]
        category: IngredientCategory,
        #[arg(long)]
        shelf_life_days: i64,
        #[arg(long, value_parser = parse_storage)]
        storage: StorageType,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Replace an ingredient's metadata
    Update {
        id: i64,
        name: String,
        #[arg(long, value_parser = parse_category)]
        category: IngredientCategory,
        #[arg(long)]
        shelf_life_days: i64,
        #[arg(long, value_parser = parse_storage)]
        storage: StorageType,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Delete one ingredient
    Delete { id: i64 },
    /// Delete several ingredients in one request
    BatchDelete { ids: Vec<i64> },
}

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// List all recipes
    List,
    /// Check whether current stock covers a recipe
    Check { id: i64 },
    /// Delete a recipe (cart and inventory are unaffected)
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the current shopping list
    Show,
    /// Add ingredients by id
    Add { ids: Vec<i64> },
    /// Add every ingredient a recipe needs
    AddRecipe { recipe_id: i64 },
    /// Remove one ingredient
    Remove { ingredient_id: i64 },
    /// Remove several ingredients (independent requests, may complete
    /// partially)
    BatchRemove { ingredient_ids: Vec<i64> },
    /// Confirm the purchase and stock everything into inventory
    Confirm {
        #[arg(long, default_value_t = 0.0)]
        total_cost: f64,
        #[arg(long)]
        remark: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum InventoryCommand {
    /// Show all stocked batches with freshness
    List,
    /// Show only batches expiring soon or already expired
    Expiring,
    /// Stock a batch manually (expiry derived from shelf life)
    Add {
        ingredient_id: i64,
        #[arg(long, value_parser = parse_date)]
        production_date: NaiveDate,
        #[arg(long, value_parser = parse_storage)]
        storage: Option<StorageType>,
    },
    /// Change where a batch is stored
    Update {
        id: i64,
        #[arg(long, value_parser = parse_storage)]
        storage: StorageType,
    },
    /// Discard one batch
    Remove { id: i64 },
    /// Discard several batches (independent requests, may complete
    /// partially)
    BatchRemove { ids: Vec<i64> },
    /// Use up one batch of an ingredient
    Consume { ingredient_id: i64 },
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List past purchases
    List,
    /// Add a past order's ingredients to the cart again
    Reorder { order_id: i64 },
    /// Delete a history record
    Delete { order_id: i64 },
}

fn parse_category(value: &str) -> Result<IngredientCategory, String> {
    value.parse()
}

fn parse_storage(value: &str) -> Result<StorageType, String> {
    value.parse()
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|error| error.to_string())
}

fn print_batch_outcome(outcome: &BatchOutcome) {
    for id in &outcome.succeeded {
        println!("  removed {}", id);
    }
    for (id, error) in &outcome.failed {
        println!("  failed  {} ({})", id, error);
    }
}

pub async fn run(cli: Cli, container: &DependencyContainer) -> anyhow::Result<()> {
    // The catalog cache backs every id lookup below, so warm it first:
    // the same "load everything on startup" the app does.
    container
        .refresh_catalog
        .execute()
        .await
        .context("could not load the catalog from the backend")?;

    match cli.command {
        Commands::Catalog { command } => run_catalog(command, container).await,
        Commands::Recipe { command } => run_recipe(command, container).await,
        Commands::Cart { command } => run_cart(command, container).await,
        Commands::Inventory { command } => run_inventory(command, container).await,
        Commands::History { command } => run_history(command, container).await,
    }
}

async fn run_catalog(
    command: CatalogCommand,
    container: &DependencyContainer,
) -> anyhow::Result<()> {
    match command {
        CatalogCommand::List => {
            for ingredient in container.catalog.ingredients() {
                println!(
                    "{:>4}  {:<20} {:<10} {:<12} keeps {} days",
                    ingredient.id,
                    ingredient.name,
                    ingredient.category,
                    ingredient.storage_type,
                    ingredient.shelf_life_days
                );
            }
        }
        CatalogCommand::Add {
            name,
            category,
            shelf_life_days,
            storage,
            image_url,
        } => {
            container
                .create_ingredient
                .execute(CreateIngredientParams {
                    name,
                    category,
                    shelf_life_days,
                    storage_type: storage,
                    image_url,
                })
                .await?;
            println!("Ingredient added");
        }
        CatalogCommand::Update {
            id,
            name,
            category,
            shelf_life_days,
            storage,
            image_url,
        } => {
            container
                .update_ingredient
                .execute(
                    id,
                    CreateIngredientParams {
                        name,
                        category,
                        shelf_life_days,
                        storage_type: storage,
                        image_url,
                    },
                )
                .await?;
            println!("Ingredient {} updated", id);
        }
        CatalogCommand::Delete { id } => {
            container.delete_ingredient.execute(id).await?;
            println!("Ingredient {} deleted", id);
        }
        CatalogCommand::BatchDelete { ids } => {
            let count = ids.len();
            container.batch_delete_ingredients.execute(ids).await?;
            println!("Deleted {} ingredients", count);
        }
    }
    Ok(())
}

async fn run_recipe(command: RecipeCommand, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        RecipeCommand::List => {
            for recipe in container.catalog.recipes() {
                let marker = if container.selection.contains(recipe.id) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{:>4} {} {:<24} {:<6} {}",
                    recipe.id, marker, recipe.name, recipe.recipe_type, recipe.description
                );
            }
        }
        RecipeCommand::Check { id } => {
            let check = container.check_recipe.execute(id).await?;
            if check.can_make {
                println!("Recipe {} can be made from current stock", id);
            } else {
                println!("Recipe {} is missing:", id);
                for ingredient in check.missing_ingredients {
                    println!("  {:>4}  {}", ingredient.id, ingredient.name);
                }
            }
        }
        RecipeCommand::Delete { id } => {
            container.delete_recipe.execute(id).await?;
            println!("Recipe {} deleted", id);
        }
    }
    Ok(())
}

async fn run_cart(command: CartCommand, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        CartCommand::Show => {
            let list = container.refresh_shopping_list.execute().await?;
            if list.is_empty() {
                println!("Shopping list is empty");
            } else {
                println!("{} ingredients to buy:", list.len());
                for entry in list.entries() {
                    if entry.recipe_names.is_empty() {
                        println!("  {:>4}  {}", entry.ingredient.id, entry.ingredient.name);
                    } else {
                        println!(
                            "  {:>4}  {} (for {})",
                            entry.ingredient.id,
                            entry.ingredient.name,
                            entry.recipe_names.join(", ")
                        );
                    }
                }
            }
        }
        CartCommand::Add { ids } => {
            container.add_to_cart.execute(ids).await?;
            let list = container.refresh_shopping_list.execute().await?;
            println!("Cart now holds {} ingredients", list.len());
        }
        CartCommand::AddRecipe { recipe_id } => {
            let added = container.add_recipe_to_cart.execute(recipe_id).await?;
            let list = container.refresh_shopping_list.execute().await?;
            println!(
                "Added {} ingredients from recipe {}; cart now holds {}",
                added,
                recipe_id,
                list.len()
            );
        }
        CartCommand::Remove { ingredient_id } => {
            container.remove_from_cart.execute(ingredient_id).await?;
            container.refresh_shopping_list.execute().await?;
            println!("Removed ingredient {}", ingredient_id);
        }
        CartCommand::BatchRemove { ingredient_ids } => {
            let result = container
                .batch_remove_from_cart
                .execute(ingredient_ids)
                .await;
            container.refresh_shopping_list.execute().await?;
            match result {
                Ok(outcome) => {
                    println!("Removed {} ingredients", outcome.succeeded.len());
                }
                Err(PurchaseError::BatchIncomplete(outcome)) => {
                    println!("Batch removal completed partially:");
                    print_batch_outcome(&outcome);
                    bail!("some removals failed");
                }
                Err(error) => return Err(error.into()),
            }
        }
        CartCommand::Confirm { total_cost, remark } => {
            // Render the view first, as the app does before the button click.
            container.refresh_shopping_list.execute().await?;
            container
                .confirm_purchase
                .execute(ConfirmPurchaseParams { total_cost, remark })
                .await?;
            println!("Purchase confirmed; everything is stocked in inventory");
        }
    }
    Ok(())
}

async fn run_inventory(
    command: InventoryCommand,
    container: &DependencyContainer,
) -> anyhow::Result<()> {
    match command {
        InventoryCommand::List => {
            for row in container.inventory_overview.execute().await? {
                let state = if row.expired {
                    "EXPIRED"
                } else if row.expiring_soon {
                    "expiring"
                } else {
                    "fresh"
                };
                println!(
                    "{:>4}  {:<20} {:<12} {:>3}% {:>4} days left  [{}]",
                    row.entry.id,
                    row.ingredient.name,
                    row.entry.storage_type,
                    row.freshness_percent,
                    row.remaining_days,
                    state
                );
            }
        }
        InventoryCommand::Expiring => {
            let rows = container.inventory_overview.execute().await?;
            for row in rows
                .into_iter()
                .filter(|row| row.expiring_soon || row.expired)
            {
                println!(
                    "{:>4}  {:<20} expires {} ({} days)",
                    row.entry.id, row.ingredient.name, row.entry.expiry_date, row.remaining_days
                );
            }
        }
        InventoryCommand::Add {
            ingredient_id,
            production_date,
            storage,
        } => {
            container
                .add_inventory
                .execute(AddInventoryEntryParams {
                    ingredient_id,
                    production_date,
                    storage_override: storage,
                })
                .await?;
            println!("Stocked ingredient {}", ingredient_id);
        }
        InventoryCommand::Update { id, storage } => {
            let rows = container.inventory_overview.execute().await?;
            let Some(row) = rows.into_iter().find(|row| row.entry.id == id) else {
                bail!("no inventory entry with id {}", id);
            };
            let mut entry = row.entry;
            entry.storage_type = storage;
            container.update_inventory.execute(entry).await?;
            println!("Entry {} moved to {}", id, storage);
        }
        InventoryCommand::Remove { id } => {
            container.remove_inventory.execute(id).await?;
            println!("Entry {} discarded", id);
        }
        InventoryCommand::BatchRemove { ids } => {
            match container.batch_remove_inventory.execute(ids).await {
                Ok(outcome) => {
                    println!("Discarded {} entries", outcome.succeeded.len());
                }
                Err(business::domain::inventory::errors::InventoryError::BatchIncomplete(
                    outcome,
                )) => {
                    println!("Batch removal completed partially:");
                    print_batch_outcome(&outcome);
                    bail!("some removals failed");
                }
                Err(error) => return Err(error.into()),
            }
        }
        InventoryCommand::Consume { ingredient_id } => {
            container.consume_ingredient.execute(ingredient_id).await?;
            println!("Consumed one batch of ingredient {}", ingredient_id);
        }
    }
    Ok(())
}

async fn run_history(
    command: HistoryCommand,
    container: &DependencyContainer,
) -> anyhow::Result<()> {
    match command {
        HistoryCommand::List => {
            for order in container.list_history.execute().await? {
                let when = order
                    .create_time
                    .map(|time| time.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "unknown date".to_string());
                println!(
                    "{:>4}  {}  {:>8.2}  {} items  {}",
                    order.id,
                    when,
                    order.total_cost,
                    order.items.len(),
                    order.remark.as_deref().unwrap_or("")
                );
                for item in &order.items {
                    println!("        {:>4}  {}", item.ingredient_id, item.ingredient_name);
                }
            }
        }
        HistoryCommand::Reorder { order_id } => {
            let count = container.reorder.execute(order_id).await?;
            println!("Re-added {} ingredients from order {}", count, order_id);
        }
        HistoryCommand::Delete { order_id } => {
            container.delete_order.execute(order_id).await?;
            println!("Order {} deleted", order_id);
        }
    }
    Ok(())
}
