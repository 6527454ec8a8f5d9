//! End-to-end update scan over a mod directory backed by a mock registry

use futures::StreamExt;
use mockito::{Matcher, Server, ServerGuard};
use semver::Version;
use tempfile::TempDir;

use rimlink::linker::{DependencyUpdate, Linker, LinkerError};
use rimlink::registry::NugetClient;
use rimlink::workshop::UnindexedWorkshop;

fn write_mod_root(root: &std::path::Path) {
    std::fs::write(
        root.join("manifest.yaml"),
        r#"
name: Example Mod
version: 1.0.0
supported_versions:
  - version: "1.5"
    status: SUPPORTED
dependencies:
  - id: brrainz.harmony
    version: 2.3.3
  - id: unlimitedhugs.hugslib
"#,
    )
    .unwrap();

    let project_dir = root.join("src/Example.Mod");
    std::fs::create_dir_all(&project_dir).unwrap();
    std::fs::write(
        project_dir.join("Example.Mod.csproj"),
        r#"<Project Sdk="Microsoft.NET.Sdk">
  <ItemGroup>
    <PackageReference Include="Lib.Harmony" Version="2.3.1" />
    <PackageReference Include="Krafs.Publicizer" Version="2.2.1" />
  </ItemGroup>
</Project>"#,
    )
    .unwrap();
}

async fn mock_registry(server: &mut ServerGuard) {
    let index_body = format!(
        r#"{{"resources": [{{"@type": "SearchQueryService", "id": "{}/query"}}]}}"#,
        server.url()
    );
    server
        .mock("GET", "/index.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(index_body)
        .expect(1)
        .create_async()
        .await;

    // Lib.Harmony has a newer release; Krafs.Publicizer does not.
    server
        .mock("GET", "/query")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Lib.Harmony".into()),
            Matcher::UrlEncoded("prerelease".into(), "false".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"@context": {"@base": "b", "@vocab": "v"},
                "totalHits": 1,
                "data": [{
                    "@id": "https://example.test/lib.harmony",
                    "id": "Lib.Harmony",
                    "version": "2.3.3",
                    "versions": [
                        {"@id": "https://example.test/lib.harmony/2.3.1", "downloads": 9, "version": "2.3.1"},
                        {"@id": "https://example.test/lib.harmony/2.3.3", "downloads": 3, "version": "2.3.3"}
                    ]
                }]}"#,
        )
        .create_async()
        .await;

    server
        .mock("GET", "/query")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Krafs.Publicizer".into()),
            Matcher::UrlEncoded("prerelease".into(), "false".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"@context": {"@base": "b", "@vocab": "v"},
                "totalHits": 1,
                "data": [{
                    "@id": "https://example.test/krafs.publicizer",
                    "id": "Krafs.Publicizer",
                    "version": "2.2.1",
                    "versions": [
                        {"@id": "https://example.test/krafs.publicizer/2.2.1", "downloads": 5, "version": "2.2.1"}
                    ]
                }]}"#,
        )
        .create_async()
        .await;
}

#[tokio::test]
async fn update_scan_reports_newer_packages_only() {
    let temp = TempDir::new().unwrap();
    write_mod_root(temp.path());

    let mut server = Server::new_async().await;
    mock_registry(&mut server).await;

    let client = NugetClient::with_index_url(&format!("{}/index.json", server.url()));
    let linker = Linker::with_client(temp.path(), client).unwrap();

    assert_eq!(linker.manifest().name, "Example Mod");
    assert_eq!(linker.projects().len(), 1);
    assert_eq!(linker.projects()[0].packages.len(), 2);

    let updates: Vec<_> = linker.update_packages().collect().await;

    let updates: Vec<DependencyUpdate> = updates.into_iter().map(|u| u.unwrap()).collect();
    assert_eq!(
        updates,
        vec![DependencyUpdate {
            id: "Lib.Harmony".to_string(),
            declared: Version::new(2, 3, 1),
            discovered: Version::new(2, 3, 3),
        }]
    );
}

#[tokio::test]
async fn dependency_scan_without_workshop_index_is_inert() {
    let temp = TempDir::new().unwrap();
    write_mod_root(temp.path());

    let server = Server::new_async().await;
    let client = NugetClient::with_index_url(&format!("{}/index.json", server.url()));
    let linker = Linker::with_client(temp.path(), client).unwrap();

    let results: Vec<_> = linker.update_dependencies(&UnindexedWorkshop).collect();

    // One result per dependency, in manifest order, all unchanged: the
    // versioned dependency finds nothing installed, the unversioned one
    // falls back to the placeholder.
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "brrainz.harmony");
    assert_eq!(results[0].declared, Version::new(2, 3, 3));
    assert!(results[0].is_unchanged());
    assert_eq!(results[1].id, "unlimitedhugs.hugslib");
    assert_eq!(results[1].declared, Version::new(0, 0, 0));
    assert!(results[1].is_unchanged());
}

#[tokio::test]
async fn missing_manifest_fails_linker_construction() {
    let temp = TempDir::new().unwrap();

    let result = Linker::from_mod_root(temp.path());

    assert!(matches!(result, Err(LinkerError::MissingManifest(_))));
}
