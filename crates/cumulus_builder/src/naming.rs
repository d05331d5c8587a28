//! Resource kind translation.
//!
//! Maps short underscore-delimited kind identifiers to fully-qualified
//! template type strings, e.g. `ec2_instance` to `AWS::EC2::Instance`.

/// Service prefixes rendered entirely in upper case.
const SERVICE_ACRONYMS: &[&str] = &[
    "ec2", "vpc", "eip", "iam", "eks", "ecr", "rds", "ecs", "ssm",
];

/// Irregular multi-segment service names that the segment-by-segment rule
/// cannot produce.
fn special_case(kind: &str) -> Option<&'static str> {
    match kind {
        "auto_scaling_auto_scaling_group" => Some("AutoScaling::AutoScalingGroup"),
        "auto_scaling_launch_configuration" => Some("AutoScaling::LaunchConfiguration"),
        "auto_scaling_scheduled_action" => Some("AutoScaling::ScheduledAction"),
        "certificate_manager_certificate" => Some("CertificateManager::Certificate"),
        "ec2_internet_gateway" => Some("EC2::InternetGateway"),
        "ec2_nat_gateway" => Some("EC2::NatGateway"),
        "ec2_route_table" => Some("EC2::RouteTable"),
        "ec2_security_group_egress" => Some("EC2::SecurityGroupEgress"),
        "ec2_security_group_ingress" => Some("EC2::SecurityGroupIngress"),
        "ec2_security_group" => Some("EC2::SecurityGroup"),
        "ec2_subnet_route_table_association" => Some("EC2::SubnetRouteTableAssociation"),
        "ec2_vpc_endpoint" => Some("EC2::VPCEndpoint"),
        "ec2_vpc_gateway_attachment" => Some("EC2::VPCGatewayAttachment"),
        "ecs_task_definition" => Some("ECS::TaskDefinition"),
        "elastic_load_balancing_v2_listener" => Some("ElasticLoadBalancingV2::Listener"),
        "elastic_load_balancing_v2_load_balancer" => Some("ElasticLoadBalancingV2::LoadBalancer"),
        "elastic_load_balancing_v2_target_group" => Some("ElasticLoadBalancingV2::TargetGroup"),
        "iam_instance_profile" => Some("IAM::InstanceProfile"),
        "logs_log_group" => Some("Logs::LogGroup"),
        "rds_db_instance" => Some("RDS::DBInstance"),
        "rds_db_parameter_group" => Some("RDS::DBParameterGroup"),
        "rds_db_subnet_group" => Some("RDS::DBSubnetGroup"),
        "route_53_hosted_zone" => Some("Route53::HostedZone"),
        "secrets_manager_secret" => Some("SecretsManager::Secret"),
        _ => None,
    }
}

/// Translate a short resource kind to its fully-qualified type string.
pub fn translate_resource_kind(kind: &str) -> String {
    if let Some(translated) = special_case(kind) {
        return format!("AWS::{}", translated);
    }

    let body = kind
        .split('_')
        .map(translate_part)
        .collect::<Vec<_>>()
        .join("::");
    format!("AWS::{}", body)
}

fn translate_part(part: &str) -> String {
    if SERVICE_ACRONYMS.contains(&part) {
        part.to_uppercase()
    } else {
        capitalize(part)
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_kind() {
        assert_eq!(
            translate_resource_kind("some_aws_resource"),
            "AWS::Some::Aws::Resource"
        );
    }

    #[test]
    fn test_ec2_is_upper_cased() {
        assert_eq!(translate_resource_kind("ec2_instance"), "AWS::EC2::Instance");
        assert_eq!(translate_resource_kind("ec2_subnet"), "AWS::EC2::Subnet");
    }

    #[test]
    fn test_ecs_is_upper_cased() {
        assert_eq!(translate_resource_kind("ecs_cluster"), "AWS::ECS::Cluster");
        assert_eq!(translate_resource_kind("ecs_service"), "AWS::ECS::Service");
    }

    #[test]
    fn test_ssm_is_upper_cased() {
        assert_eq!(translate_resource_kind("ssm_parameter"), "AWS::SSM::Parameter");
    }

    #[test]
    fn test_s3_bucket() {
        assert_eq!(translate_resource_kind("s3_bucket"), "AWS::S3::Bucket");
    }

    #[test]
    fn test_special_cases() {
        assert_eq!(
            translate_resource_kind("ecs_task_definition"),
            "AWS::ECS::TaskDefinition"
        );
        assert_eq!(
            translate_resource_kind("ec2_vpc_gateway_attachment"),
            "AWS::EC2::VPCGatewayAttachment"
        );
        assert_eq!(
            translate_resource_kind("route_53_hosted_zone"),
            "AWS::Route53::HostedZone"
        );
        assert_eq!(
            translate_resource_kind("elastic_load_balancing_v2_load_balancer"),
            "AWS::ElasticLoadBalancingV2::LoadBalancer"
        );
        assert_eq!(
            translate_resource_kind("auto_scaling_auto_scaling_group"),
            "AWS::AutoScaling::AutoScalingGroup"
        );
    }
}
