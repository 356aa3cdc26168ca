use std::collections::BTreeSet;

use prometheus_domain::Exercise;

use crate::normalize;

/// Narrows the exercise catalog before ranking.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub muscles: BTreeSet<String>,
    pub equipment: BTreeSet<String>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .filter(|e| {
                (self.muscles.is_empty()
                    || e.muscles().any(|muscle| {
                        let muscle = normalize(muscle);
                        self.muscles.iter().any(|m| normalize(m) == muscle)
                    }))
                    && (self.equipment.is_empty()
                        || e.equipment.iter().any(|equipment| {
                            let equipment = normalize(equipment);
                            self.equipment
                                .iter()
                                .any(|eq| equipment.contains(normalize(eq).as_str()))
                        }))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.muscles.is_empty() && self.equipment.is_empty()
    }

    pub fn toggle_muscle(&mut self, muscle: &str) {
        toggle(&mut self.muscles, muscle);
    }

    pub fn toggle_equipment(&mut self, equipment: &str) {
        toggle(&mut self.equipment, equipment);
    }
}

fn toggle(selection: &mut BTreeSet<String>, value: &str) {
    let value = normalize(value);

    if value.is_empty() {
        return;
    }

    if !selection.remove(&value) {
        selection.insert(value);
    }
}
