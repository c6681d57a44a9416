/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use boxnet::v1::{Client, Config, Folder, FolderStructureOptions, StatusObserver};
use futures::future::BoxFuture;
use std::sync::Arc;

// Prints a folder and everything below it
fn print_folder<'a>(folder: &'a Folder, depth: usize) -> BoxFuture<'a, anyhow::Result<()>> {
    Box::pin(async move {
        let indent = "  ".repeat(depth);
        println!("{}{}/ ({})", indent, folder.name, folder.id);
        for file in &folder.files {
            let mut tags = Vec::new();
            for tag in &file.tags {
                tags.push(tag.text().await?);
            }
            let owner = match &file.owner {
                Some(owner) => owner.login().await?,
                None => String::new(),
            };
            println!(
                "{}  {} {} bytes [{}] {}",
                indent,
                file.name,
                file.size,
                tags.join(", "),
                owner
            );
        }
        for sub in &folder.folders {
            print_folder(sub, depth + 1).await?;
        }
        Ok(())
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let login = std::env::var("BOXNET_LOGIN")?;
    let password = std::env::var("BOXNET_PASSWORD")?;

    let client = Client::new(config)?;
    let observer: StatusObserver = Arc::new(|msg: &str| println!("{}", msg));
    if !client.login(&login, &password, Some(observer)).await? {
        anyhow::bail!("Login refused");
    }

    let resp = client
        .get_root_folder_structure(FolderStructureOptions::NONE)
        .await?;
    match resp.payload {
        Some(root) => print_folder(&root, 0).await?,
        None => println!("Listing failed: {:?} {:?}", resp.status, resp.error),
    }

    client.logout().await?;
    Ok(())
}
