//! # NPC Generation
//!
//! One resident per occupied building, standing at the building's center.

use crate::dialogue::dialog_for;
use crate::game::{new_entity_id, Npc};
use crate::generation::{GenerationConfig, Generator, Settlement};
use crate::{HearthvaleError, HearthvaleResult};
use rand::rngs::StdRng;

/// Turns an occupant type such as `"fishmonger"` into a display name.
pub fn display_name(npc_type: &str) -> String {
    let mut chars = npc_type.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Spawns settlement residents.
#[derive(Debug, Clone, Copy)]
pub struct NpcGenerator<'a> {
    settlements: &'a [Settlement],
}

impl<'a> NpcGenerator<'a> {
    pub fn new(settlements: &'a [Settlement]) -> Self {
        Self { settlements }
    }
}

impl Generator<Vec<Npc>> for NpcGenerator<'_> {
    fn generate(&self, _config: &GenerationConfig, rng: &mut StdRng) -> HearthvaleResult<Vec<Npc>> {
        let mut npcs = Vec::new();
        for (index, settlement) in self.settlements.iter().enumerate() {
            for building in &settlement.buildings {
                let Some(npc_type) = building.occupant.as_deref() else {
                    continue;
                };
                npcs.push(Npc {
                    id: new_entity_id(rng),
                    position: building.center(),
                    name: display_name(npc_type),
                    npc_type: npc_type.to_string(),
                    building: building.name.clone(),
                    settlement: index,
                    dialog: dialog_for(npc_type),
                    has_shop: building.has_shop,
                });
            }
        }
        Ok(npcs)
    }

    fn validate(&self, npcs: &Vec<Npc>, _config: &GenerationConfig) -> HearthvaleResult<()> {
        let occupied: usize = self
            .settlements
            .iter()
            .map(|s| s.occupied_buildings().count())
            .sum();
        if npcs.len() != occupied {
            return Err(HearthvaleError::GenerationFailed(format!(
                "{} NPCs for {} occupied buildings",
                npcs.len(),
                occupied
            )));
        }
        for npc in npcs {
            let home = self
                .settlements
                .get(npc.settlement)
                .and_then(|s| s.buildings.iter().find(|b| b.center() == npc.position));
            if home.is_none() {
                return Err(HearthvaleError::GenerationFailed(format!(
                    "{} at {:?} is not inside its building",
                    npc.name, npc.position
                )));
            }
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "NpcGenerator"
    }
}
