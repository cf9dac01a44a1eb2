//! Container logistics queries.

use serde::Serialize;
use tt_core::{Category, Snapshot};

/// Containers carried by one ship label.
#[derive(Debug, Clone, Serialize)]
pub struct ShipManifest {
    pub ship: String,
    pub container_ids: Vec<String>,
    /// Matching entry in the ship table. Labels are not enforced references.
    pub on_map: bool,
}

/// Group containers by ship label, in order of first appearance.
pub fn containers_by_ship(snapshot: &Snapshot) -> Vec<ShipManifest> {
    let mut manifests: Vec<ShipManifest> = Vec::new();
    for container in &snapshot.containers {
        match manifests.iter_mut().find(|m| m.ship == container.ship) {
            Some(manifest) => manifest.container_ids.push(container.id.clone()),
            None => manifests.push(ShipManifest {
                ship: container.ship.clone(),
                container_ids: vec![container.id.clone()],
                on_map: snapshot.ships.iter().any(|s| {
                    s.name.as_deref() == Some(container.ship.as_str())
                        || s.id.as_deref() == Some(container.ship.as_str())
                }),
            }),
        }
    }
    manifests
}

/// Number of containers per display category, in first-seen order.
pub fn category_counts(snapshot: &Snapshot) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for container in &snapshot.containers {
        let category = container.status.category();
        match counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, n)) => *n += 1,
            None => counts.push((category, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_core::{Container, Ship, Status};

    fn container(id: &str, ship: &str, status: &str) -> Container {
        Container {
            id: id.to_string(),
            ship: ship.to_string(),
            status: Status::parse(status),
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot::new(
            vec![Ship {
                id: Some("s1".to_string()),
                name: Some("Aurora".to_string()),
                lat: 20.0,
                lng: 50.0,
            }],
            vec![
                container("C1", "Aurora", "בדרך"),
                container("C2", "Borealis", "במכס"),
                container("C3", "Aurora", "במחסן"),
                container("C4", "Aurora", "בדרך"),
            ],
            vec![],
        )
    }

    #[test]
    fn groups_in_first_seen_order() {
        let manifests = containers_by_ship(&snapshot());
        assert_eq!(manifests.len(), 2);
        assert_eq!(manifests[0].ship, "Aurora");
        assert_eq!(manifests[0].container_ids, vec!["C1", "C3", "C4"]);
        assert!(manifests[0].on_map);
        assert_eq!(manifests[1].ship, "Borealis");
        assert!(!manifests[1].on_map);
    }

    #[test]
    fn counts_per_category() {
        let counts = category_counts(&snapshot());
        assert_eq!(
            counts,
            vec![
                (Category::Info, 2),
                (Category::Warning, 1),
                (Category::Success, 1)
            ]
        );
    }

    #[test]
    fn no_containers() {
        let empty = Snapshot::default();
        assert!(containers_by_ship(&empty).is_empty());
        assert!(category_counts(&empty).is_empty());
    }
}
