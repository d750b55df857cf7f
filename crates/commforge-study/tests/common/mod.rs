//! Shared fixture: a small but complete bridge project exercising every
//! command family.

use commforge_core::ProjectState;

pub fn sample_project() -> ProjectState {
    serde_json::from_str(SAMPLE_JSON).expect("fixture parses")
}

const SAMPLE_JSON: &str = r#"{
    "meshes": [
        { "id": 1, "name": "Deck", "filename": "deck.med", "format": "med", "unit": 20 },
        { "id": 2, "name": "Piers", "filename": "piers.med", "format": "med", "unit": 21 },
        { "id": 3, "name": "Abutments", "filename": "abutments.med", "format": "native", "unit": 22 }
    ],
    "groups": [
        { "name": "Deck_Faces", "topology": "surface" },
        { "name": "Pier_Volume", "topology": "volume" },
        { "name": "Edge_Beams", "topology": "wire" },
        { "name": "Tip_Nodes", "topology": "node" }
    ],
    "models": [
        {
            "id": 4,
            "group": "Deck_Faces",
            "topology": "surface",
            "formulation": "DKT",
            "section": { "kind": "shell", "thickness": 0.2 }
        },
        { "id": 5, "group": "Pier_Volume", "topology": "volume", "formulation": "3D" },
        {
            "id": 6,
            "group": "Edge_Beams",
            "topology": "wire",
            "formulation": "POU_D_T",
            "section": { "kind": "beam_rectangle", "hy": 0.3, "hz": 0.2 }
        }
    ],
    "materials": [
        {
            "id": 7,
            "name": "Steel",
            "properties": { "E": "210000", "NU": "0,3", "RHO": "7.85e-9" }
        },
        {
            "id": 8,
            "name": "Concrete",
            "properties": { "E": "30000", "NU": "0.2", "RHO": "2.5e-9", "ALPHA": "1e-5" }
        }
    ],
    "material_assignments": [
        { "material": "Steel", "groups": ["Deck_Faces", "Edge_Beams"] },
        { "material": "Concrete", "groups": ["Pier_Volume"] }
    ],
    "restraints": [
        {
            "id": 9,
            "name": "fix base",
            "group": "Pier_Volume",
            "components": { "DX": "0", "DY": "0", "DZ": "0" }
        }
    ],
    "loads": [
        {
            "id": 10,
            "name": "self weight",
            "kind": "gravity",
            "parameters": { "GRAVITE": "9.81" }
        },
        {
            "id": 11,
            "name": "tip load",
            "kind": "nodal_force",
            "group": "Tip_Nodes",
            "parameters": { "FZ": "-1000" }
        }
    ],
    "load_cases": [
        {
            "id": 12,
            "name": "service",
            "restraints": ["fix base"],
            "loads": ["self weight", "tip load"]
        }
    ]
}"#;
