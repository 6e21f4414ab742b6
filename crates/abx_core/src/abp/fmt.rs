//! Field formatting shared by all node converters.
//!
//! The paste format is picky: floats always carry six fractional digits,
//! booleans are lowercase tokens, and enum values are written as the bare
//! leaf name without the `EEnum::` qualifier. Everything here is a pure
//! function over already-parsed JSON values; absent optional fields
//! propagate as `None` so callers omit them instead of writing defaults.

use serde_json::Value;

use super::{ExportError, ExportResult};

/// Render a float with exactly six fractional digits.
///
/// The paste format always writes `1.500000`, never `1.5`.
pub fn format_float(x: f64) -> String {
    format!("{:.6}", x)
}

/// Render an optional `{X,Y,Z}` mapping as `(X=<f>,Y=<f>,Z=<f>)`.
///
/// An absent mapping, or absent components, collapse to zero.
pub fn format_vector3(v: Option<&Value>) -> String {
    let axis = |name: &str| v.and_then(|v| v.get(name)).and_then(Value::as_f64).unwrap_or(0.0);
    format!(
        "(X={},Y={},Z={})",
        format_float(axis("X")),
        format_float(axis("Y")),
        format_float(axis("Z"))
    )
}

/// Render an optional `{Pitch,Yaw,Roll}` mapping as `(Pitch=<f>,Yaw=<f>,Roll=<f>)`.
pub fn format_rotator(r: Option<&Value>) -> String {
    let axis = |name: &str| r.and_then(|r| r.get(name)).and_then(Value::as_f64).unwrap_or(0.0);
    format!(
        "(Pitch={},Yaw={},Roll={})",
        format_float(axis("Pitch")),
        format_float(axis("Yaw")),
        format_float(axis("Roll"))
    )
}

/// Lowercase boolean token. Absence propagates: the caller must skip the
/// field entirely rather than emit a default.
pub fn bool_token(b: Option<bool>) -> Option<&'static str> {
    b.map(|b| if b { "true" } else { "false" })
}

/// Strip the namespace from an enum value: `EBoneControlSpace::BCS_WorldSpace`
/// becomes `BCS_WorldSpace`. Values without a `::` pass through unchanged.
pub fn enum_leaf(e: Option<&str>) -> Option<&str> {
    e.map(|e| e.rsplit("::").next().unwrap_or(e))
}

/// Render a list of collision limit shapes as `Tag=(entry,entry,...)`.
///
/// Returns `None` when the list is absent or empty. Per-shape fields fall
/// back to the engine defaults: radius 0, length 1, driving bone `None`,
/// zero offsets.
pub fn format_limits(limits: Option<&Value>, tag: &str) -> Option<String> {
    let list = limits.and_then(Value::as_array)?;
    if list.is_empty() {
        return None;
    }

    let entries: Vec<String> = list
        .iter()
        .map(|shape| {
            let radius = shape.get("Radius").and_then(Value::as_f64).unwrap_or(0.0);
            let length = shape.get("Length").and_then(Value::as_f64).unwrap_or(1.0);
            let bone = shape
                .get("DrivingBone")
                .and_then(|b| b.get("BoneName"))
                .and_then(Value::as_str)
                .unwrap_or("None");

            format!(
                "(Radius={},Length={},DrivingBone=(BoneName=\"{}\"),OffsetLocation={},OffsetRotation={})",
                format_float(radius),
                format_float(length),
                bone,
                format_vector3(shape.get("OffsetLocation")),
                format_rotator(shape.get("OffsetRotation"))
            )
        })
        .collect();

    Some(format!("{}=({})", tag, entries.join(",")))
}

/// Shared trailing fields every animation node may carry.
///
/// Renders only the subset present in the record, in fixed order, each
/// entry preceded by a comma so the result appends directly after the
/// category-specific fields.
pub fn base_anim_fields(key: &str, node: &Value) -> ExportResult<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(lod) = opt(node, "LODThreshold").and_then(Value::as_f64) {
        parts.push(format!("LODThreshold={}", lod as i64));
    }

    if let Some(alpha) = opt(node, "ActualAlpha").and_then(Value::as_f64) {
        parts.push(format!("ActualAlpha={}", format_float(alpha)));
    }

    if let Some(input) = enum_leaf(opt(node, "AlphaInputType").and_then(Value::as_str)) {
        if !input.is_empty() {
            parts.push(format!("AlphaInputType={}", input));
        }
    }

    if let Some(token) = bool_token(opt(node, "bAlphaBoolEnabled").and_then(Value::as_bool)) {
        parts.push(format!("bAlphaBoolEnabled={}", token));
    }

    if let Some(curve) = opt(node, "AlphaCurveName").and_then(Value::as_str) {
        if !curve.is_empty() {
            parts.push(format!("AlphaCurveName=\"{}\"", curve));
        }
    }

    if opt(node, "AlphaScaleBiasClamp").is_some() {
        parts.push(alpha_scale_bias_clamp(key, node)?);
    }

    if parts.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!(",{}", parts.join(",")))
    }
}

/// The 12-field input scale/bias/clamp block. Float sub-fields are
/// required once the block is present; the bool flags default to false.
fn alpha_scale_bias_clamp(key: &str, node: &Value) -> ExportResult<String> {
    let f = |path: &str| -> ExportResult<String> { Ok(format_float(req_f64(key, node, path)?)) };
    let b = |path: &str| bool_token(opt_path(node, path).and_then(Value::as_bool)).unwrap_or("false");

    Ok(format!(
        "AlphaScaleBiasClamp=(bMapRange={},bClampResult={},bInterpResult={},InRange=(Min={},Max={}),OutRange=(Min={},Max={}),Scale={},Bias={},ClampMin={},ClampMax={},InterpSpeedIncreasing={},InterpSpeedDecreasing={})",
        b("AlphaScaleBiasClamp.bMapRange"),
        b("AlphaScaleBiasClamp.bClampResult"),
        b("AlphaScaleBiasClamp.bInterpResult"),
        f("AlphaScaleBiasClamp.InRange.Min")?,
        f("AlphaScaleBiasClamp.InRange.Max")?,
        f("AlphaScaleBiasClamp.OutRange.Min")?,
        f("AlphaScaleBiasClamp.OutRange.Max")?,
        f("AlphaScaleBiasClamp.Scale")?,
        f("AlphaScaleBiasClamp.Bias")?,
        f("AlphaScaleBiasClamp.ClampMin")?,
        f("AlphaScaleBiasClamp.ClampMax")?,
        f("AlphaScaleBiasClamp.InterpSpeedIncreasing")?,
        f("AlphaScaleBiasClamp.InterpSpeedDecreasing")?,
    ))
}

/// `,ComponentPose=(LinkID=<id>)` when the node records an input link,
/// empty otherwise.
pub fn component_pose(node: &Value) -> String {
    match node
        .get("ComponentPose")
        .and_then(|cp| cp.get("LinkID"))
        .and_then(Value::as_i64)
    {
        Some(id) => format!(",ComponentPose=(LinkID={})", id),
        None => String::new(),
    }
}

// ----------------------------------------------------------------------------
// Field access
// ----------------------------------------------------------------------------
//
// FModel omits fields holding engine defaults, so nearly every read is
// optional; JSON null counts as absent throughout. Required reads walk a
// dotted path and report the deepest present prefix, so a record missing
// `RootBone` fails on `RootBone`, not `RootBone.BoneName`.

pub(crate) fn missing(key: &str, field: &str) -> ExportError {
    ExportError::MissingField {
        key: key.to_string(),
        field: field.to_string(),
    }
}

/// Direct optional field read, null treated as absent.
pub(crate) fn opt<'a>(node: &'a Value, field: &str) -> Option<&'a Value> {
    node.get(field).filter(|v| !v.is_null())
}

/// Optional dotted-path read, null treated as absent at every step.
pub(crate) fn opt_path<'a>(node: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = node;
    for segment in path.split('.') {
        current = match current.get(segment) {
            Some(v) if !v.is_null() => v,
            _ => return None,
        };
    }
    Some(current)
}

/// Required dotted-path read.
pub(crate) fn req<'a>(key: &str, node: &'a Value, path: &str) -> ExportResult<&'a Value> {
    let mut current = node;
    let mut walked = String::new();
    for segment in path.split('.') {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);
        current = match current.get(segment) {
            Some(v) if !v.is_null() => v,
            _ => return Err(missing(key, &walked)),
        };
    }
    Ok(current)
}

pub(crate) fn req_f64(key: &str, node: &Value, path: &str) -> ExportResult<f64> {
    req(key, node, path)?.as_f64().ok_or_else(|| missing(key, path))
}

pub(crate) fn req_str<'a>(key: &str, node: &'a Value, path: &str) -> ExportResult<&'a str> {
    req(key, node, path)?.as_str().ok_or_else(|| missing(key, path))
}

pub(crate) fn req_bool(key: &str, node: &Value, path: &str) -> ExportResult<bool> {
    req(key, node, path)?.as_bool().ok_or_else(|| missing(key, path))
}

/// Required enum field, rendered as its leaf name.
pub(crate) fn req_enum<'a>(key: &str, node: &'a Value, path: &str) -> ExportResult<&'a str> {
    let raw = req_str(key, node, path)?;
    Ok(enum_leaf(Some(raw)).unwrap_or(raw))
}

/// Required `{X,Y,Z}` mapping with required components.
pub(crate) fn req_vec3(key: &str, node: &Value, field: &str) -> ExportResult<String> {
    Ok(format!(
        "(X={},Y={},Z={})",
        format_float(req_f64(key, node, &format!("{}.X", field))?),
        format_float(req_f64(key, node, &format!("{}.Y", field))?),
        format_float(req_f64(key, node, &format!("{}.Z", field))?),
    ))
}

/// Required `{Pitch,Yaw,Roll}` mapping with required components.
pub(crate) fn req_rotator(key: &str, node: &Value, field: &str) -> ExportResult<String> {
    Ok(format!(
        "(Pitch={},Yaw={},Roll={})",
        format_float(req_f64(key, node, &format!("{}.Pitch", field))?),
        format_float(req_f64(key, node, &format!("{}.Yaw", field))?),
        format_float(req_f64(key, node, &format!("{}.Roll", field))?),
    ))
}
