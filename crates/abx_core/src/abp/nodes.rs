//! Per-category node converters.
//!
//! Each supported node type maps a subset of its record's fields into the
//! `Node=(...)` property expression of one pasted object block. Matching
//! is by key prefix, specific categories before the generic
//! `AnimGraphNode_` fallback; keys outside that namespace are not nodes
//! and convert to nothing.
//!
//! FModel omits fields that hold the engine default, so optional fields
//! are omitted from the output as well; only the fields the engine cannot
//! reconstruct are required.

use serde_json::Value;

use super::fmt::{
    base_anim_fields, bool_token, component_pose, enum_leaf, format_float, format_limits,
    format_vector3, opt, opt_path, req_bool, req_enum, req_f64, req_rotator, req_str, req_vec3,
};
use super::ExportResult;

/// Key prefix shared by every animation-graph node record.
pub const NODE_KEY_PREFIX: &str = "AnimGraphNode_";

/// Vertical spacing between pasted nodes in the graph editor.
const NODE_ROW_HEIGHT: i64 = 144;

/// Pin declarations shared by the bone-controller nodes.
const CONTROLLER_PINS: &[&str] = &["ComponentPose", "bAlphaBoolEnabled", "Alpha", "AlphaCurveName"];

/// Prefixes with a dedicated converter, tested in order. First match wins,
/// so these stay ahead of the bare `AnimGraphNode_` fallback.
const CATEGORIES: &[(&str, Category)] = &[
    ("AnimGraphNode_KawaiiPhysics", Category::KawaiiPhysics),
    ("AnimGraphNode_ModifyBone", Category::ModifyBone),
    ("AnimGraphNode_CopyBone", Category::CopyBone),
    ("AnimGraphNode_Constraint", Category::Constraint),
    ("AnimGraphNode_RotationMultiplier", Category::RotationMultiplier),
    ("AnimGraphNode_LayeredBoneBlend", Category::LayeredBoneBlend),
    ("AnimGraphNode_RigidBody", Category::RigidBody),
];

/// Node categories recognized by the converter registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    KawaiiPhysics,
    ModifyBone,
    CopyBone,
    Constraint,
    RotationMultiplier,
    LayeredBoneBlend,
    RigidBody,
    /// Any other `AnimGraphNode_` key: emitted with base fields only.
    Generic,
}

impl Category {
    /// Match a property key against the category prefixes.
    ///
    /// Returns `None` for keys that are not animation-graph nodes at all.
    pub fn classify(key: &str) -> Option<Category> {
        for (prefix, category) in CATEGORIES {
            if key.starts_with(prefix) {
                return Some(*category);
            }
        }

        if key.starts_with(NODE_KEY_PREFIX) {
            Some(Category::Generic)
        } else {
            None
        }
    }
}

/// One serialized object block, ready to be placed at a row in the graph.
#[derive(Debug)]
pub struct ObjectBlock {
    /// Engine class path, e.g. `/Script/AnimGraph.AnimGraphNode_CopyBone`.
    pub class_path: String,

    /// Object name: the source property key, verbatim.
    pub name: String,

    /// Comma-joined content of the `Node=(...)` expression.
    pub node: String,

    /// Property pins to expose on the pasted node.
    pub pins: &'static [&'static str],
}

impl ObjectBlock {
    /// Render the block, placed `row` rows down the graph.
    pub fn render(&self, row: usize) -> String {
        let mut out = format!(
            "Begin Object Class={} Name=\"{}\"\n",
            self.class_path, self.name
        );
        out.push_str(&format!("   Node=({})\n", self.node));
        for (i, pin) in self.pins.iter().enumerate() {
            out.push_str(&format!(
                "   ShowPinForProperties({})=(PropertyName=\"{}\",bShowPin=True)\n",
                i, pin
            ));
        }
        out.push_str("   NodePosX=0\n");
        out.push_str(&format!("   NodePosY={}\n", row as i64 * NODE_ROW_HEIGHT));
        out.push_str("End Object");
        out
    }
}

/// Convert one `(key, record)` pair into an object block.
///
/// Returns `Ok(None)` for keys that do not name an animation-graph node;
/// such records are skipped without consuming a layout row.
pub fn convert_node(key: &str, node: &Value) -> ExportResult<Option<ObjectBlock>> {
    let category = match Category::classify(key) {
        Some(category) => category,
        None => return Ok(None),
    };

    let block = match category {
        Category::KawaiiPhysics => kawaii_physics(key, node)?,
        Category::ModifyBone => modify_bone(key, node)?,
        Category::CopyBone => copy_bone(key, node)?,
        Category::Constraint => constraint(key, node)?,
        Category::RotationMultiplier => rotation_multiplier(key, node)?,
        Category::LayeredBoneBlend => layered_bone_blend(key, node)?,
        Category::RigidBody => rigid_body(key, node)?,
        Category::Generic => generic(key, node)?,
    };

    Ok(Some(block))
}

fn kawaii_physics(key: &str, node: &Value) -> ExportResult<ObjectBlock> {
    let root_bone = req_str(key, node, "RootBone.BoneName")?;
    let dummy_length = format_float(req_f64(key, node, "DummyBoneLength")?);
    let forward_axis = req_enum(key, node, "BoneForwardAxis")?;
    let teleport_distance = format_float(req_f64(key, node, "TeleportDistanceThreshold")?);
    let teleport_rotation = format_float(req_f64(key, node, "TeleportRotationThreshold")?);

    // The parens are emitted even when the settings mapping is absent
    let physics = match opt(node, "PhysicsSettings") {
        Some(_) => format!(
            "Damping={},Stiffness={},WorldDampingLocation={},WorldDampingRotation={},Radius={},LimitAngle={}",
            format_float(req_f64(key, node, "PhysicsSettings.Damping")?),
            format_float(req_f64(key, node, "PhysicsSettings.Stiffness")?),
            format_float(req_f64(key, node, "PhysicsSettings.WorldDampingLocation")?),
            format_float(req_f64(key, node, "PhysicsSettings.WorldDampingRotation")?),
            format_float(req_f64(key, node, "PhysicsSettings.Radius")?),
            format_float(req_f64(key, node, "PhysicsSettings.LimitAngle")?),
        ),
        None => String::new(),
    };

    let mut extra = String::new();

    for tag in ["CapsuleLimits", "SphericalLimits", "PlanarLimits"] {
        if let Some(rendered) = format_limits(node.get(tag), tag) {
            extra.push(',');
            extra.push_str(&rendered);
        }
    }

    if let Some(curve_name) = opt_path(node, "LimitAngleCurve.ObjectName").and_then(Value::as_str) {
        if !curve_name.is_empty() {
            let curve_path = req_str(key, node, "LimitAngleCurve.ObjectPath")?;
            extra.push_str(&format!(
                ",LimitAngleCurve=(ObjectName=\"{}\",ObjectPath=\"{}\")",
                curve_name, curve_path
            ));
        }
    }

    if let Some(token) = bool_token(opt(node, "bEnableWind").and_then(Value::as_bool)) {
        extra.push_str(&format!(",bEnableWind={}", token));
    }

    if let Some(scale) = opt(node, "WindScale").and_then(Value::as_f64) {
        extra.push_str(&format!(",WindScale={}", format_float(scale)));
    }

    if let Some(gravity) = opt(node, "Gravity") {
        extra.push_str(&format!(",Gravity={}", format_vector3(Some(gravity))));
    }

    if let Some(scale_bias) = alpha_scale_bias(key, node)? {
        extra.push_str(&scale_bias);
    }

    if let Some(bool_blend) = alpha_bool_blend(key, node)? {
        extra.push_str(&bool_blend);
    }

    let base = base_anim_fields(key, node)?;
    let pose = component_pose(node);

    Ok(ObjectBlock {
        class_path: "/Script/KawaiiPhysicsEd.AnimGraphNode_KawaiiPhysics".to_string(),
        name: key.to_string(),
        node: format!(
            "RootBone=(BoneName=\"{}\"),DummyBoneLength={},BoneForwardAxis={},TeleportDistanceThreshold={},TeleportRotationThreshold={},PhysicsSettings=({}){}{}{}",
            root_bone, dummy_length, forward_axis, teleport_distance, teleport_rotation,
            physics, extra, base, pose
        ),
        pins: CONTROLLER_PINS,
    })
}

fn modify_bone(key: &str, node: &Value) -> ExportResult<ObjectBlock> {
    let bone = req_str(key, node, "BoneToModify.BoneName")?;
    let translation = req_vec3(key, node, "Translation")?;
    let rotation = req_rotator(key, node, "Rotation")?;
    let scale = req_vec3(key, node, "Scale")?;

    let translation_mode = req_enum(key, node, "TranslationMode")?;
    let rotation_mode = req_enum(key, node, "RotationMode")?;
    let scale_mode = req_enum(key, node, "ScaleMode")?;
    let translation_space = req_enum(key, node, "TranslationSpace")?;
    let rotation_space = req_enum(key, node, "RotationSpace")?;
    let scale_space = req_enum(key, node, "ScaleSpace")?;

    let base = base_anim_fields(key, node)?;
    let pose = component_pose(node);

    Ok(ObjectBlock {
        class_path: "/Script/AnimGraph.AnimGraphNode_ModifyBone".to_string(),
        name: key.to_string(),
        node: format!(
            "BoneToModify=(BoneName=\"{}\"),Translation={},Rotation={},Scale={},TranslationMode={},RotationMode={},ScaleMode={},TranslationSpace={},RotationSpace={},ScaleSpace={}{}{}",
            bone, translation, rotation, scale, translation_mode, rotation_mode, scale_mode,
            translation_space, rotation_space, scale_space, base, pose
        ),
        pins: CONTROLLER_PINS,
    })
}

fn copy_bone(key: &str, node: &Value) -> ExportResult<ObjectBlock> {
    let source = req_str(key, node, "SourceBone.BoneName")?;
    let target = req_str(key, node, "TargetBone.BoneName")?;

    let copy_translation = if req_bool(key, node, "bCopyTranslation")? { "true" } else { "false" };
    let copy_rotation = if req_bool(key, node, "bCopyRotation")? { "true" } else { "false" };
    let copy_scale = if req_bool(key, node, "bCopyScale")? { "true" } else { "false" };

    let space = req_enum(key, node, "ControlSpace")?;

    // Absent Alpha means fully applied, not zero
    let alpha = format_float(opt(node, "Alpha").and_then(Value::as_f64).unwrap_or(1.0));

    let mut extra = String::new();
    if let Some(scale_bias) = alpha_scale_bias(key, node)? {
        extra.push_str(&scale_bias);
    }
    if let Some(bool_blend) = alpha_bool_blend(key, node)? {
        extra.push_str(&bool_blend);
    }

    let base = base_anim_fields(key, node)?;
    let pose = component_pose(node);

    Ok(ObjectBlock {
        class_path: "/Script/AnimGraph.AnimGraphNode_CopyBone".to_string(),
        name: key.to_string(),
        node: format!(
            "SourceBone=(BoneName=\"{}\"),TargetBone=(BoneName=\"{}\"),bCopyTranslation={},bCopyRotation={},bCopyScale={},ControlSpace={},Alpha={}{}{}{}",
            source, target, copy_translation, copy_rotation, copy_scale, space, alpha,
            extra, base, pose
        ),
        pins: CONTROLLER_PINS,
    })
}

fn constraint(key: &str, node: &Value) -> ExportResult<ObjectBlock> {
    let bone = req_str(key, node, "BoneToModify.BoneName")?;

    let mut entries: Vec<String> = Vec::new();
    if let Some(setups) = opt(node, "ConstraintSetup").and_then(Value::as_array) {
        for setup in setups {
            if setup.is_null() {
                continue;
            }

            let target = req_str(key, setup, "TargetBone.BoneName")?;
            let offset_option = req_enum(key, setup, "OffsetOption")?;
            let transform_type = req_enum(key, setup, "TransformType")?;
            let per_x = if req_bool(key, setup, "PerAxis.bX")? { "true" } else { "false" };
            let per_y = if req_bool(key, setup, "PerAxis.bY")? { "true" } else { "false" };
            let per_z = if req_bool(key, setup, "PerAxis.bZ")? { "true" } else { "false" };

            entries.push(format!(
                "(TargetBone=(BoneName=\"{}\"),OffsetOption={},TransformType={},PerAxis=(bX={},bY={},bZ={}))",
                target, offset_option, transform_type, per_x, per_y, per_z
            ));
        }
    }

    let weights: Vec<String> = opt(node, "ConstraintWeights")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(Value::as_f64).map(format_float).collect())
        .unwrap_or_default();

    let base = base_anim_fields(key, node)?;
    let pose = component_pose(node);

    Ok(ObjectBlock {
        class_path: "/Script/AnimGraph.AnimGraphNode_Constraint".to_string(),
        name: key.to_string(),
        node: format!(
            "BoneToModify=(BoneName=\"{}\"),ConstraintSetup=({}),ConstraintWeights=({}){}{}",
            bone,
            entries.join(","),
            weights.join(","),
            base,
            pose
        ),
        pins: CONTROLLER_PINS,
    })
}

fn rotation_multiplier(key: &str, node: &Value) -> ExportResult<ObjectBlock> {
    let target = req_str(key, node, "TargetBone.BoneName")?;
    let source = req_str(key, node, "SourceBone.BoneName")?;
    // Same convention as CopyBone's Alpha: absent means full strength
    let multiplier = format_float(opt(node, "Multiplier").and_then(Value::as_f64).unwrap_or(1.0));
    let axis = req_enum(key, node, "RotationAxisToRefer")?;

    let base = base_anim_fields(key, node)?;
    let pose = component_pose(node);

    Ok(ObjectBlock {
        class_path: "/Script/AnimGraph.AnimGraphNode_RotationMultiplier".to_string(),
        name: key.to_string(),
        node: format!(
            "TargetBone=(BoneName=\"{}\"),SourceBone=(BoneName=\"{}\"),Multiplier={},RotationAxisToRefer={}{}{}",
            target, source, multiplier, axis, base, pose
        ),
        pins: CONTROLLER_PINS,
    })
}

fn layered_bone_blend(key: &str, node: &Value) -> ExportResult<ObjectBlock> {
    let mut layers: Vec<String> = Vec::new();
    if let Some(setup) = opt(node, "LayerSetup").and_then(Value::as_array) {
        for layer in setup {
            if layer.is_null() {
                continue;
            }

            let mut filters: Vec<String> = Vec::new();
            if let Some(branch) = layer.get("BranchFilters").and_then(Value::as_array) {
                for filter in branch {
                    if filter.is_null() {
                        continue;
                    }
                    let bone = req_str(key, filter, "BoneName")?;
                    let depth = filter.get("BlendDepth").and_then(Value::as_f64).unwrap_or(0.0) as i64;
                    filters.push(format!("(BoneName=\"{}\",BlendDepth={})", bone, depth));
                }
            }

            layers.push(format!("(BranchFilters=({}))", filters.join(",")));
        }
    }

    let mut parts: Vec<String> = vec![format!("LayerSetup=({})", layers.join(","))];

    if let Some(token) = bool_token(opt(node, "bMeshSpaceRotationBlend").and_then(Value::as_bool)) {
        parts.push(format!("bMeshSpaceRotationBlend={}", token));
    }
    if let Some(token) = bool_token(opt(node, "bMeshSpaceScaleBlend").and_then(Value::as_bool)) {
        parts.push(format!("bMeshSpaceScaleBlend={}", token));
    }
    if let Some(option) = enum_leaf(opt(node, "CurveBlendOption").and_then(Value::as_str)) {
        parts.push(format!("CurveBlendOption={}", option));
    }
    if let Some(token) = bool_token(opt(node, "bBlendRootMotionBasedOnRootBone").and_then(Value::as_bool)) {
        parts.push(format!("bBlendRootMotionBasedOnRootBone={}", token));
    }
    if let Some(list) = opt(node, "BlendWeights").and_then(Value::as_array) {
        let weights: Vec<String> = list.iter().filter_map(Value::as_f64).map(format_float).collect();
        parts.push(format!("BlendWeights=({})", weights.join(",")));
    }

    let base = base_anim_fields(key, node)?;
    let pose = component_pose(node);

    Ok(ObjectBlock {
        class_path: "/Script/AnimGraph.AnimGraphNode_LayeredBoneBlend".to_string(),
        name: key.to_string(),
        node: format!("{}{}{}", parts.join(","), base, pose),
        pins: &[],
    })
}

fn rigid_body(key: &str, node: &Value) -> ExportResult<ObjectBlock> {
    let mut extra = String::new();

    if let Some(token) = bool_token(opt(node, "OverrideWorldGravity").and_then(Value::as_bool)) {
        extra.push_str(&format!(",OverrideWorldGravity={}", token));
    }
    if let Some(scale) = opt(node, "WorldSpaceGravityScale").and_then(Value::as_f64) {
        extra.push_str(&format!(",WorldSpaceGravityScale={}", format_float(scale)));
    }
    if let Some(scale) = opt(node, "ComponentLinearAccScale").and_then(Value::as_f64) {
        extra.push_str(&format!(",ComponentLinearAccScale={}", format_float(scale)));
    }
    if let Some(scale) = opt(node, "CachedBoundsScale").and_then(Value::as_f64) {
        extra.push_str(&format!(",CachedBoundsScale={}", format_float(scale)));
    }
    if opt(node, "BaseBoneRef").is_some() {
        let bone = req_str(key, node, "BaseBoneRef.BoneName")?;
        extra.push_str(&format!(",BaseBoneRef=(BoneName=\"{}\")", bone));
    }

    extra.push_str(&base_anim_fields(key, node)?);
    extra.push_str(&component_pose(node));

    // Every field here is optional, so the first one present carries a
    // separator with nothing before it
    let node_expr = extra.trim_start_matches(',').to_string();

    Ok(ObjectBlock {
        class_path: "/Script/AnimGraph.AnimGraphNode_RigidBody".to_string(),
        name: key.to_string(),
        node: node_expr,
        pins: &["ComponentPose"],
    })
}

fn generic(key: &str, node: &Value) -> ExportResult<ObjectBlock> {
    let mut fields = base_anim_fields(key, node)?;
    fields.push_str(&component_pose(node));

    Ok(ObjectBlock {
        // The engine class carries the same name as the exported key
        class_path: format!("/Script/AnimGraph.{}", key),
        name: key.to_string(),
        node: fields.trim_start_matches(',').to_string(),
        pins: &[],
    })
}

/// `,AlphaScaleBias=(Scale=..,Bias=..)` when the node carries one.
fn alpha_scale_bias(key: &str, node: &Value) -> ExportResult<Option<String>> {
    if opt(node, "AlphaScaleBias").is_none() {
        return Ok(None);
    }

    Ok(Some(format!(
        ",AlphaScaleBias=(Scale={},Bias={})",
        format_float(req_f64(key, node, "AlphaScaleBias.Scale")?),
        format_float(req_f64(key, node, "AlphaScaleBias.Bias")?),
    )))
}

/// `,AlphaBoolBlend=(BlendInTime=..,BlendOutTime=..,BlendOption=..)`.
///
/// `BlendOption` is written exactly as exported, qualifier included.
fn alpha_bool_blend(key: &str, node: &Value) -> ExportResult<Option<String>> {
    if opt(node, "AlphaBoolBlend").is_none() {
        return Ok(None);
    }

    Ok(Some(format!(
        ",AlphaBoolBlend=(BlendInTime={},BlendOutTime={},BlendOption={})",
        format_float(req_f64(key, node, "AlphaBoolBlend.BlendInTime")?),
        format_float(req_f64(key, node, "AlphaBoolBlend.BlendOutTime")?),
        req_str(key, node, "AlphaBoolBlend.BlendOption")?,
    )))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::ExportError;
    use super::*;

    #[test]
    fn test_classify_priority_and_fallback() {
        assert_eq!(
            Category::classify("AnimGraphNode_KawaiiPhysics_0"),
            Some(Category::KawaiiPhysics)
        );
        assert_eq!(
            Category::classify("AnimGraphNode_CopyBone_12"),
            Some(Category::CopyBone)
        );
        assert_eq!(
            Category::classify("AnimGraphNode_TwoBoneIK_3"),
            Some(Category::Generic)
        );
        assert_eq!(Category::classify("UberGraphFrame"), None);
    }

    #[test]
    fn test_modify_bone_full() {
        let node = json!({
            "BoneToModify": { "BoneName": "hand_r" },
            "Translation": { "X": 1.0, "Y": 2.0, "Z": 3.0 },
            "Rotation": { "Pitch": 10.0, "Yaw": 20.0, "Roll": 30.0 },
            "Scale": { "X": 1.0, "Y": 1.0, "Z": 1.0 },
            "TranslationMode": "EBoneModificationMode::BMM_Additive",
            "RotationMode": "EBoneModificationMode::BMM_Replace",
            "ScaleMode": "EBoneModificationMode::BMM_Ignore",
            "TranslationSpace": "EBoneControlSpace::BCS_WorldSpace",
            "RotationSpace": "EBoneControlSpace::BCS_BoneSpace",
            "ScaleSpace": "EBoneControlSpace::BCS_ComponentSpace"
        });

        let block = convert_node("AnimGraphNode_ModifyBone_2", &node).unwrap().unwrap();

        assert_eq!(block.class_path, "/Script/AnimGraph.AnimGraphNode_ModifyBone");
        assert_eq!(block.name, "AnimGraphNode_ModifyBone_2");
        assert_eq!(
            block.node,
            "BoneToModify=(BoneName=\"hand_r\"),Translation=(X=1.000000,Y=2.000000,Z=3.000000),Rotation=(Pitch=10.000000,Yaw=20.000000,Roll=30.000000),Scale=(X=1.000000,Y=1.000000,Z=1.000000),TranslationMode=BMM_Additive,RotationMode=BMM_Replace,ScaleMode=BMM_Ignore,TranslationSpace=BCS_WorldSpace,RotationSpace=BCS_BoneSpace,ScaleSpace=BCS_ComponentSpace"
        );
        assert_eq!(block.pins.len(), 4);
    }

    #[test]
    fn test_copy_bone_alpha_default_and_link() {
        let node = json!({
            "SourceBone": { "BoneName": "spine_01" },
            "TargetBone": { "BoneName": "spine_02" },
            "bCopyTranslation": true,
            "bCopyRotation": false,
            "bCopyScale": false,
            "ControlSpace": "BCS_WorldSpace::BCS_WorldSpace",
            "ComponentPose": { "LinkID": 5 }
        });

        let block = convert_node("AnimGraphNode_CopyBone_0", &node).unwrap().unwrap();

        assert_eq!(
            block.node,
            "SourceBone=(BoneName=\"spine_01\"),TargetBone=(BoneName=\"spine_02\"),bCopyTranslation=true,bCopyRotation=false,bCopyScale=false,ControlSpace=BCS_WorldSpace,Alpha=1.000000,ComponentPose=(LinkID=5)"
        );
    }

    #[test]
    fn test_kawaii_physics_full() {
        let node = json!({
            "RootBone": { "BoneName": "hair_root" },
            "DummyBoneLength": 8.0,
            "BoneForwardAxis": "EBoneForwardAxis::X_Positive",
            "TeleportDistanceThreshold": 300.0,
            "TeleportRotationThreshold": 60.0,
            "PhysicsSettings": {
                "Damping": 0.2,
                "Stiffness": 0.05,
                "WorldDampingLocation": 0.8,
                "WorldDampingRotation": 0.8,
                "Radius": 3.0,
                "LimitAngle": 0.0
            },
            "Gravity": { "Z": -980.0 }
        });

        let block = convert_node("AnimGraphNode_KawaiiPhysics_1", &node).unwrap().unwrap();

        assert_eq!(
            block.class_path,
            "/Script/KawaiiPhysicsEd.AnimGraphNode_KawaiiPhysics"
        );
        assert_eq!(
            block.node,
            "RootBone=(BoneName=\"hair_root\"),DummyBoneLength=8.000000,BoneForwardAxis=X_Positive,TeleportDistanceThreshold=300.000000,TeleportRotationThreshold=60.000000,PhysicsSettings=(Damping=0.200000,Stiffness=0.050000,WorldDampingLocation=0.800000,WorldDampingRotation=0.800000,Radius=3.000000,LimitAngle=0.000000),Gravity=(X=0.000000,Y=0.000000,Z=-980.000000)"
        );
    }

    #[test]
    fn test_kawaii_physics_missing_root_bone() {
        let node = json!({ "DummyBoneLength": 8.0 });

        match convert_node("AnimGraphNode_KawaiiPhysics_0", &node) {
            Err(ExportError::MissingField { key, field }) => {
                assert_eq!(key, "AnimGraphNode_KawaiiPhysics_0");
                assert_eq!(field, "RootBone");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_constraint_skips_null_setups() {
        let node = json!({
            "BoneToModify": { "BoneName": "spine_03" },
            "ConstraintSetup": [
                null,
                {
                    "TargetBone": { "BoneName": "clavicle_l" },
                    "OffsetOption": "EConstraintOffsetOption::Offset_RefPose",
                    "TransformType": "ETransformConstraintType::Rotation",
                    "PerAxis": { "bX": true, "bY": true, "bZ": false }
                }
            ],
            "ConstraintWeights": [0.5]
        });

        let block = convert_node("AnimGraphNode_Constraint_0", &node).unwrap().unwrap();

        assert_eq!(
            block.node,
            "BoneToModify=(BoneName=\"spine_03\"),ConstraintSetup=((TargetBone=(BoneName=\"clavicle_l\"),OffsetOption=Offset_RefPose,TransformType=Rotation,PerAxis=(bX=true,bY=true,bZ=false))),ConstraintWeights=(0.500000)"
        );
    }

    #[test]
    fn test_rotation_multiplier_default_multiplier() {
        let node = json!({
            "TargetBone": { "BoneName": "upperarm_twist_01_l" },
            "SourceBone": { "BoneName": "upperarm_l" },
            "RotationAxisToRefer": "EBoneAxis::BA_Y"
        });

        let block = convert_node("AnimGraphNode_RotationMultiplier_0", &node)
            .unwrap()
            .unwrap();

        assert_eq!(
            block.node,
            "TargetBone=(BoneName=\"upperarm_twist_01_l\"),SourceBone=(BoneName=\"upperarm_l\"),Multiplier=1.000000,RotationAxisToRefer=BA_Y"
        );
    }

    #[test]
    fn test_layered_bone_blend_skips_null_layers() {
        let node = json!({
            "LayerSetup": [
                null,
                { "BranchFilters": [ { "BoneName": "neck_01", "BlendDepth": 2 }, null ] }
            ]
        });

        let block = convert_node("AnimGraphNode_LayeredBoneBlend_0", &node)
            .unwrap()
            .unwrap();

        assert_eq!(
            block.node,
            "LayerSetup=((BranchFilters=((BoneName=\"neck_01\",BlendDepth=2))))"
        );
        assert_eq!(block.node.matches("BranchFilters").count(), 1);
        assert!(block.pins.is_empty());
    }

    #[test]
    fn test_layered_bone_blend_optional_fields() {
        let node = json!({
            "LayerSetup": [ { "BranchFilters": [ { "BoneName": "thigh_l" } ] } ],
            "bMeshSpaceRotationBlend": true,
            "CurveBlendOption": "ECurveBlendOption::Override",
            "BlendWeights": [1.0, 0.25]
        });

        let block = convert_node("AnimGraphNode_LayeredBoneBlend_1", &node)
            .unwrap()
            .unwrap();

        assert_eq!(
            block.node,
            "LayerSetup=((BranchFilters=((BoneName=\"thigh_l\",BlendDepth=0)))),bMeshSpaceRotationBlend=true,CurveBlendOption=Override,BlendWeights=(1.000000,0.250000)"
        );
    }

    #[test]
    fn test_rigid_body_strips_leading_separator() {
        let empty = json!({});
        let block = convert_node("AnimGraphNode_RigidBody_0", &empty).unwrap().unwrap();
        assert_eq!(block.node, "");
        assert_eq!(block.pins, ["ComponentPose"]);

        let partial = json!({
            "WorldSpaceGravityScale": 2.0,
            "BaseBoneRef": { "BoneName": "pelvis" }
        });
        let block = convert_node("AnimGraphNode_RigidBody_0", &partial).unwrap().unwrap();
        assert_eq!(
            block.node,
            "WorldSpaceGravityScale=2.000000,BaseBoneRef=(BoneName=\"pelvis\")"
        );
    }

    #[test]
    fn test_generic_fallback_uses_key_as_class() {
        let node = json!({ "LODThreshold": 2 });

        let block = convert_node("AnimGraphNode_TwoBoneIK_3", &node).unwrap().unwrap();

        assert_eq!(block.class_path, "/Script/AnimGraph.AnimGraphNode_TwoBoneIK_3");
        assert_eq!(block.node, "LODThreshold=2");
        assert!(block.pins.is_empty());
    }

    #[test]
    fn test_non_node_key_is_skipped() {
        let node = json!({});
        assert!(convert_node("UberGraphFrame", &node).unwrap().is_none());
    }

    #[test]
    fn test_render_layout() {
        let block = ObjectBlock {
            class_path: "/Script/AnimGraph.AnimGraphNode_RigidBody".to_string(),
            name: "AnimGraphNode_RigidBody_0".to_string(),
            node: String::new(),
            pins: &["ComponentPose"],
        };

        let rendered = block.render(2);

        assert!(rendered.starts_with(
            "Begin Object Class=/Script/AnimGraph.AnimGraphNode_RigidBody Name=\"AnimGraphNode_RigidBody_0\"\n"
        ));
        assert!(rendered.contains("   ShowPinForProperties(0)=(PropertyName=\"ComponentPose\",bShowPin=True)\n"));
        assert!(rendered.contains("   NodePosX=0\n"));
        assert!(rendered.contains("   NodePosY=288\n"));
        assert!(rendered.ends_with("End Object"));
    }
}
